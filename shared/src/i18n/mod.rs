//! # Internationalization
//!
//! The page ships in two locales. Display strings are looked up by key in a
//! [`TranslationTable`] that is parsed once from JSON resources compiled into
//! the binary.
//!
//! ## Missing keys
//!
//! A key with no entry for the active locale resolves to the key itself and a
//! warning is logged, so a content gap shows up on the page instead of a blank
//! or a crash.
//!
//! ```rust
//! use shared::i18n::{Locale, Translator};
//!
//! let translator = Translator::builtin().unwrap().with_locale(Locale::Zh);
//! assert_eq!(translator.translate("noSuchKey"), "noSuchKey");
//! ```

pub mod keys;
mod table;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use table::TranslationTable;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Short code used in resource names, storage and the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Name of the language written in that language, as shown in the switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "ENGLISH",
            Locale::Zh => "汉语",
        }
    }

    /// Parse a language tag such as `en`, `en-US`, `zh-CN` or `zh_Hans`.
    ///
    /// Only the primary subtag is considered and matching is case-insensitive.
    ///
    /// ```rust
    /// use shared::i18n::Locale;
    ///
    /// assert_eq!(Locale::from_tag("zh-CN"), Some(Locale::Zh));
    /// assert_eq!(Locale::from_tag("EN_gb"), Some(Locale::En));
    /// assert_eq!(Locale::from_tag("fr"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let primary = tag.trim().split(['-', '_']).next()?;
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(primary))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// First candidate tag that names a supported locale, else `fallback`.
///
/// Candidates are tried in order; `None` and unsupported tags are skipped.
///
/// ```rust
/// use shared::i18n::{resolve_locale, Locale};
///
/// let picked = resolve_locale([None, Some("fr-FR"), Some("zh-TW")], Locale::En);
/// assert_eq!(picked, Locale::Zh);
/// ```
pub fn resolve_locale<I, S>(candidates: I, fallback: Locale) -> Locale
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|tag| Locale::from_tag(tag.as_ref()))
        .unwrap_or(fallback)
}

/// A translation table paired with the active locale.
///
/// Cloning is cheap: the table is shared.
#[derive(Debug, Clone)]
pub struct Translator {
    table: Arc<TranslationTable>,
    locale: Locale,
}

impl Translator {
    pub fn new(table: Arc<TranslationTable>, locale: Locale) -> Self {
        Self { table, locale }
    }

    /// Translator over the embedded resources, starting in [`Locale::default`].
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(TranslationTable::builtin()?), Locale::default()))
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn table(&self) -> &Arc<TranslationTable> {
        &self.table
    }

    /// Look up `key` in the active locale.
    pub fn translate(&self, key: &str) -> String {
        self.table.translate(self.locale, key)
    }

    pub fn translate_in(&self, locale: Locale, key: &str) -> String {
        self.table.translate(locale, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(translator: &Translator) -> Vec<String> {
        keys::ALL.iter().map(|key| translator.translate(key)).collect()
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("zh"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("zh-Hans"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag(" ZH_cn "), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("de"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_resolve_locale_order() {
        let query = Some("zh".to_string());
        let stored = Some("en".to_string());
        assert_eq!(resolve_locale([query, stored], Locale::En), Locale::Zh);

        let none: [Option<String>; 3] = [None, None, None];
        assert_eq!(resolve_locale(none, Locale::Zh), Locale::Zh);

        assert_eq!(resolve_locale([Some("xx"), Some("en-GB")], Locale::Zh), Locale::En);
    }

    #[test]
    fn test_locale_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Translator::builtin().unwrap().locale(), Locale::En);
    }

    #[test]
    fn test_locale_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Locale::Zh).unwrap(), "\"zh\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }

    #[test]
    fn test_every_key_non_empty_in_every_locale() {
        let translator = Translator::builtin().unwrap();
        for locale in Locale::ALL {
            for key in keys::ALL {
                let text = translator.translate_in(locale, key);
                assert!(!text.is_empty(), "{key} is blank for {locale}");
                assert_ne!(text, *key, "{key} fell back to the raw key for {locale}");
            }
        }
    }

    #[test]
    fn test_set_locale_switches_strings() {
        let mut translator = Translator::builtin().unwrap();
        assert_eq!(translator.translate(keys::NAV_HOME), "Home");

        translator.set_locale(Locale::Zh);
        assert_eq!(translator.locale(), Locale::Zh);
        assert_eq!(translator.translate(keys::NAV_HOME), "首页");
    }

    #[test]
    fn test_locale_round_trip_restores_rendered_strings() {
        let mut translator = Translator::builtin().unwrap();
        let before = rendered(&translator);

        translator.set_locale(Locale::Zh);
        assert_ne!(rendered(&translator), before);

        translator.set_locale(Locale::En);
        assert_eq!(rendered(&translator), before);
    }

    #[test]
    fn test_missing_key_renders_key() {
        let translator = Translator::builtin().unwrap();
        assert_eq!(translator.translate("definitelyMissing"), "definitelyMissing");
    }

    #[test]
    fn test_translators_are_isolated() {
        let shared = Translator::builtin().unwrap();
        let mut first = shared.clone();
        let second = shared;

        first.set_locale(Locale::Zh);
        assert_eq!(first.locale(), Locale::Zh);
        assert_eq!(second.locale(), Locale::En);
        assert!(Arc::ptr_eq(first.table(), second.table()));
    }
}
