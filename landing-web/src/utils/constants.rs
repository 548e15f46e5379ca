//! Application constants

/// `localStorage` key holding the last selected locale code.
pub const LOCALE_STORAGE_KEY: &str = "clover.locale";

/// Query parameter that forces a locale, e.g. `?lang=zh`.
pub const LANG_QUERY_PARAM: &str = "lang";

/// Element shown by `index.html` until the WASM bundle mounts.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

/// Delay before the second attempt at hiding the loading screen.
pub const LOADING_HIDE_RETRY_MS: u32 = 100;

pub const LOGO_PATH: &str = "images/Logo.svg";
pub const LANGUAGE_ICON_PATH: &str = "images/language_icon.svg";
