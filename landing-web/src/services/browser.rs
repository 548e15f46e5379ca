//! Thin wrappers over `web_sys` for the few browser APIs the page touches.
//!
//! Every function degrades to a no-op (or `None`) outside a browser window so
//! callers never have to handle a missing DOM.

use leptos::task::spawn_local;
use shared::error::{Result, SharedError};
use shared::i18n::Locale;
use shared::links::LinkOpener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::utils::constants::{LOADING_ELEMENT_ID, LOADING_HIDE_RETRY_MS, LOCALE_STORAGE_KEY};

/// Opens links with `window.open(url, "_blank")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| SharedError::Navigation("no window available".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(SharedError::Navigation("popup was blocked".to_string())),
            Err(e) => Err(SharedError::Navigation(format!("{:?}", e))),
        }
    }
}

/// Current `window.innerWidth` in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// The browser's preferred language tag, e.g. `zh-CN`.
pub fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_stored_locale() -> Option<String> {
    local_storage()?.get_item(LOCALE_STORAGE_KEY).ok().flatten()
}

pub fn store_locale(locale: Locale) {
    let Some(storage) = local_storage() else {
        log::debug!("localStorage unavailable, locale not persisted");
        return;
    };
    if let Err(e) = storage.set_item(LOCALE_STORAGE_KEY, locale.code()) {
        log::warn!("Failed to persist locale: {:?}", e);
    }
}

/// Keep `<html lang>` in step with the active locale.
pub fn set_document_lang(locale: Locale) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("lang", locale.code()) {
            log::warn!("Failed to set document lang: {:?}", e);
        }
    }
}

/// Scroll the element with `id` into view. Missing anchors are logged.
pub fn scroll_to_anchor(id: &str) {
    match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        Some(element) => element.scroll_into_view(),
        None => log::warn!("Anchor '#{}' not found", id),
    }
}

fn hide_loading_element() -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(LOADING_ELEMENT_ID))
    else {
        return false;
    };

    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        html_element.class_list().add_1("hidden").ok();
    }
    element.set_attribute("style", "display: none !important;").ok();
    true
}

/// Hide the static loading screen now, and once more after a short delay in
/// case the element was inserted late.
pub fn hide_loading_screen() {
    if hide_loading_element() {
        log::debug!("Loading screen hidden");
    }

    spawn_local(async {
        gloo_timers::future::TimeoutFuture::new(LOADING_HIDE_RETRY_MS).await;
        hide_loading_element();
    });
}
