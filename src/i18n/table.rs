//! Per-locale translation table.

use std::collections::{
    BTreeMap,
    HashMap,
};

use super::{
    Locale,
    TranslationFile,
    TranslationKey,
};

/// Mapping from `(locale, key)` to localized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Entries grouped by locale
    entries: BTreeMap<Locale, HashMap<String, String>>,
}

impl TranslationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the compile-time catalog for every built-in locale.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for locale in Locale::ALL {
            let strings = table.entries.entry(locale).or_default();
            for key in TranslationKey::ALL {
                strings.insert(key.as_str().to_string(), key.builtin(locale).to_string());
            }
        }
        table
    }

    /// Inserts or replaces one entry.
    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(locale).or_default().insert(key.into(), value.into());
    }

    /// Text for `(locale, key)`. An empty string counts as missing.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries.get(&locale)?.get(key).map(String::as_str).filter(|text| !text.is_empty())
    }

    #[must_use]
    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.get(locale, key).is_some()
    }

    /// Merges a translation file into its locale, overriding existing
    /// entries. Returns the number of entries merged.
    pub fn merge_file(&mut self, file: &TranslationFile) -> usize {
        let strings = self.entries.entry(file.locale).or_default();
        for (key, value) in &file.keys {
            strings.insert(key.clone(), value.clone());
        }
        tracing::debug!(
            locale = %file.locale,
            path = %file.file_path.display(),
            merged = file.keys.len(),
            "Merged translation overrides"
        );
        file.keys.len()
    }

    /// Locales that have at least one entry.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.entries.iter().filter(|(_, strings)| !strings.is_empty()).map(|(locale, _)| *locale)
    }

    /// Keys defined for `locale`, in no particular order.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> + '_ {
        self.entries.get(&locale).into_iter().flat_map(|strings| strings.keys().map(String::as_str))
    }

    /// Number of entries for `locale`.
    #[must_use]
    pub fn len(&self, locale: Locale) -> usize {
        self.entries.get(&locale).map_or(0, HashMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}
