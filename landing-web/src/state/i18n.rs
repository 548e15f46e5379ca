//! Locale state management
//!
//! The active [`Translator`] lives in a signal inside [`I18nContext`]. Views
//! call [`I18nContext::t`] from a reactive closure, so a locale change
//! re-renders every string that depends on it.

use std::sync::Arc;

use leptos::prelude::*;
use shared::i18n::{resolve_locale, Locale, TranslationTable, Translator};

use crate::services::browser;
use crate::utils::constants::LANG_QUERY_PARAM;
use crate::utils::url::get_query_param;

#[derive(Clone, Copy)]
pub struct I18nContext {
    translator: RwSignal<Translator>,
}

impl I18nContext {
    pub fn new(translator: Translator) -> Self {
        Self {
            translator: RwSignal::new(translator),
        }
    }

    pub fn locale(&self) -> Locale {
        self.translator.with(Translator::locale)
    }

    pub fn set_locale(&self, locale: Locale) {
        log::info!("Locale changed to {}", locale);
        self.translator.update(|translator| translator.set_locale(locale));
    }

    /// Translate `key` in the active locale. Tracks the locale signal.
    pub fn t(&self, key: &str) -> String {
        self.translator.with(|translator| translator.translate(key))
    }
}

/// Load the translation table, pick the startup locale and provide the context.
///
/// Startup locale order: `?lang=` query parameter, stored preference, browser
/// language, then `default_locale`. Only later changes are written back to
/// storage, so a detected locale never becomes a saved preference.
pub fn provide_i18n_context(default_locale: Locale) -> I18nContext {
    let table = TranslationTable::builtin().unwrap_or_else(|e| {
        log::error!("Failed to load translations, rendering keys: {}", e);
        TranslationTable::default()
    });

    let initial = resolve_locale(
        [
            get_query_param(LANG_QUERY_PARAM),
            browser::load_stored_locale(),
            browser::browser_language(),
        ],
        default_locale,
    );
    log::debug!("Initial locale: {}", initial);

    let context = I18nContext::new(Translator::new(Arc::new(table), initial));
    provide_context(context);

    Effect::new(move |prev: Option<Locale>| {
        let locale = context.locale();
        if prev.is_some_and(|prev| prev != locale) {
            browser::store_locale(locale);
        }
        browser::set_document_lang(locale);
        locale
    });

    context
}

pub fn use_i18n_context() -> I18nContext {
    expect_context::<I18nContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::i18n::keys;

    fn rendered(context: &I18nContext) -> Vec<String> {
        keys::ALL.iter().map(|key| context.t(key)).collect()
    }

    #[test]
    fn test_context_locale_round_trip() {
        let owner = Owner::new();
        owner.set();

        let context = I18nContext::new(Translator::builtin().unwrap());
        assert_eq!(context.locale(), Locale::En);
        let before = rendered(&context);

        context.set_locale(Locale::Zh);
        assert_eq!(context.locale(), Locale::Zh);
        assert_eq!(context.t(keys::WEB_WALLET), "网页钱包");
        assert_ne!(rendered(&context), before);

        context.set_locale(Locale::En);
        assert_eq!(rendered(&context), before);
    }

    #[test]
    fn test_contexts_are_isolated() {
        let owner = Owner::new();
        owner.set();

        let translator = Translator::builtin().unwrap();
        let first = I18nContext::new(translator.clone());
        let second = I18nContext::new(translator);

        first.set_locale(Locale::Zh);
        assert_eq!(first.locale(), Locale::Zh);
        assert_eq!(second.locale(), Locale::En);
        assert_eq!(second.t(keys::NAV_HOME), "Home");
    }

    #[test]
    fn test_context_missing_key_renders_key() {
        let owner = Owner::new();
        owner.set();

        let context = I18nContext::new(Translator::builtin().unwrap().with_locale(Locale::Zh));
        assert_eq!(context.t("notARealKey"), "notARealKey");
    }
}
