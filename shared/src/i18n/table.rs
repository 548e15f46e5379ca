use std::collections::HashMap;

use super::Locale;
use crate::error::{Result, SharedError};

const EN_RESOURCE: &str = include_str!("../../locales/en.json");
const ZH_RESOURCE: &str = include_str!("../../locales/zh.json");

/// Static (locale, key) → display string mapping. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<Locale, HashMap<String, String>>,
}

impl TranslationTable {
    /// Parse the resources embedded at compile time.
    pub fn builtin() -> Result<Self> {
        let mut table = Self::default();
        table.load(Locale::En, EN_RESOURCE)?;
        table.load(Locale::Zh, ZH_RESOURCE)?;
        Ok(table)
    }

    /// Parse one locale's resource from a flat JSON object of strings.
    ///
    /// Loading the same locale twice replaces its previous entries.
    pub fn load(&mut self, locale: Locale, json: &str) -> Result<()> {
        let strings: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| SharedError::TranslationParse {
                locale: locale.code(),
                source,
            })?;
        self.entries.insert(locale, strings);
        Ok(())
    }

    /// Entry for `key` in `locale`. Empty strings count as absent.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries
            .get(&locale)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Look up `key`, falling back to the key itself when the locale has no
    /// entry or an empty one.
    pub fn translate(&self, locale: Locale, key: &str) -> String {
        match self.lookup(locale, key) {
            Some(text) => text.to_string(),
            None => {
                log::warn!("Missing translation for '{}' in locale '{}'", key, locale);
                key.to_string()
            }
        }
    }

    /// `(locale, key)` pairs from `keys` that have no entry or an empty one.
    pub fn missing_keys<'a>(&self, keys: &[&'a str]) -> Vec<(Locale, &'a str)> {
        Locale::ALL
            .into_iter()
            .flat_map(|locale| keys.iter().map(move |key| (locale, *key)))
            .filter(|(locale, key)| self.lookup(*locale, key).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;

    #[test]
    fn test_builtin_table_is_complete() {
        let table = TranslationTable::builtin().unwrap();
        assert_eq!(table.missing_keys(keys::ALL), Vec::new());
    }

    #[test]
    fn test_locales_carry_same_key_set() {
        let table = TranslationTable::builtin().unwrap();
        let mut en: Vec<_> = table.entries[&Locale::En].keys().collect();
        let mut zh: Vec<_> = table.entries[&Locale::Zh].keys().collect();
        en.sort();
        zh.sort();
        assert_eq!(en, zh);
    }

    #[test]
    fn test_missing_keys_reports_gaps() {
        let mut table = TranslationTable::default();
        table.load(Locale::En, r#"{"a": "A", "b": ""}"#).unwrap();
        table.load(Locale::Zh, r#"{"a": "甲"}"#).unwrap();

        assert_eq!(
            table.missing_keys(&["a", "b"]),
            vec![(Locale::En, "b"), (Locale::Zh, "b")]
        );
    }

    #[test]
    fn test_load_rejects_non_string_values() {
        let mut table = TranslationTable::default();
        let err = table.load(Locale::Zh, r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, SharedError::TranslationParse { locale: "zh", .. }));
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        let mut table = TranslationTable::default();
        table.load(Locale::En, r#"{"greeting": "Hello"}"#).unwrap();

        assert_eq!(table.translate(Locale::En, "greeting"), "Hello");
        assert_eq!(table.translate(Locale::Zh, "greeting"), "greeting");
        assert_eq!(table.translate(Locale::En, "farewell"), "farewell");
    }

    #[test]
    fn test_translate_empty_entry_renders_key() {
        let mut table = TranslationTable::default();
        table.load(Locale::Zh, r#"{"webWallet": ""}"#).unwrap();

        assert_eq!(table.lookup(Locale::Zh, "webWallet"), None);
        assert_eq!(table.translate(Locale::Zh, "webWallet"), "webWallet");
        assert!(table.missing_keys(&["webWallet"]).contains(&(Locale::Zh, "webWallet")));
    }
}
