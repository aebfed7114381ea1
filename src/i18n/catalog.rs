//! Active locale and translation lookup.

use std::sync::Arc;

use super::{
    Locale,
    LocaleError,
    MissingKeyLog,
    TranslationKey,
    TranslationTable,
};
use crate::store::PreferenceStore;

/// Store slot holding the persisted locale.
pub const LOCALE_KEY: &str = "locale";

/// Returned by [`LocaleCatalog::translate`] for an empty key, which has no
/// visible text of its own.
pub const EMPTY_KEY_FALLBACK: &str = "(empty key)";

/// Construction options for [`LocaleCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOptions {
    pub default_locale: Locale,
    /// Selectable locales, in switch order. Empty means only the default.
    pub supported_locales: Vec<Locale>,
}

impl Default for LocaleOptions {
    fn default() -> Self {
        Self { default_locale: Locale::It, supported_locales: Locale::ALL.to_vec() }
    }
}

/// Picks the initial locale from the persisted raw value.
///
/// The stored value must be the exact code of a supported locale; anything
/// else resolves to the default.
#[must_use]
pub fn resolve_initial_locale(persisted: Option<&str>, options: &LocaleOptions) -> Locale {
    persisted
        .and_then(Locale::from_code)
        .filter(|locale| options.supported_locales.contains(locale))
        .unwrap_or(options.default_locale)
}

/// Owner of the active locale and the translation table.
pub struct LocaleCatalog {
    /// Translation entries, static after construction
    table: TranslationTable,
    /// Active locale
    active: Locale,
    /// Locales accepted by [`Self::set_locale`], in switch order
    supported: Vec<Locale>,
    /// Persistence backend
    store: Arc<dyn PreferenceStore>,
    /// Fallback hits seen by [`Self::translate`]
    missing: MissingKeyLog,
}

impl LocaleCatalog {
    /// Reads the persisted locale once and resolves the active locale.
    pub fn initialize(
        store: Arc<dyn PreferenceStore>,
        table: TranslationTable,
        options: &LocaleOptions,
    ) -> Self {
        let persisted = store.get(LOCALE_KEY);
        let active = resolve_initial_locale(persisted.as_deref(), options);

        let mut supported = Vec::with_capacity(options.supported_locales.len());
        for locale in &options.supported_locales {
            if !supported.contains(locale) {
                supported.push(*locale);
            }
        }
        if supported.is_empty() {
            supported.push(options.default_locale);
        }

        tracing::debug!(
            locale = %active,
            persisted = ?persisted,
            supported = ?supported,
            "Locale initialized"
        );

        Self { table, active, supported, store, missing: MissingKeyLog::new() }
    }

    #[must_use]
    pub const fn current_locale(&self) -> Locale {
        self.active
    }

    #[must_use]
    pub fn supported_locales(&self) -> &[Locale] {
        &self.supported
    }

    #[must_use]
    pub fn is_supported(&self, locale: Locale) -> bool {
        self.supported.contains(&locale)
    }

    /// Switches to `locale` and persists it.
    ///
    /// # Errors
    /// [`LocaleError::UnsupportedLocale`] when `locale` is not selectable; the
    /// active locale is left unchanged.
    pub fn set_locale(&mut self, locale: Locale) -> Result<(), LocaleError> {
        if !self.is_supported(locale) {
            tracing::debug!(%locale, "Rejected unsupported locale");
            return Err(LocaleError::UnsupportedLocale { code: locale.code().to_string() });
        }

        self.active = locale;
        self.store.set(LOCALE_KEY, locale.code());
        tracing::debug!(%locale, "Locale changed");
        Ok(())
    }

    /// Parses `code` and switches to it.
    ///
    /// # Errors
    /// [`LocaleError::UnsupportedLocale`] for unknown or unsupported codes.
    pub fn set_locale_code(&mut self, code: &str) -> Result<Locale, LocaleError> {
        let locale = Locale::parse(code)
            .filter(|locale| self.is_supported(*locale))
            .ok_or_else(|| LocaleError::UnsupportedLocale { code: code.to_string() })?;
        self.set_locale(locale)?;
        Ok(locale)
    }

    /// Locale the language switch moves to next, wrapping around.
    #[must_use]
    pub fn next_locale(&self) -> Locale {
        let position = self.supported.iter().position(|locale| *locale == self.active);
        let next = position.map_or(0, |index| index + 1);
        self.supported
            .get(next)
            .or_else(|| self.supported.first())
            .copied()
            .unwrap_or(self.active)
    }

    /// Moves to [`Self::next_locale`] and returns it.
    pub fn toggle_locale(&mut self) -> Locale {
        let next = self.next_locale();
        if next != self.active {
            self.active = next;
            self.store.set(LOCALE_KEY, next.code());
            tracing::debug!(locale = %next, "Locale toggled");
        }
        self.active
    }

    /// Resolves `key` for the active locale.
    ///
    /// Falls back to the key itself when the active locale has no entry, so
    /// the gap stays visible in rendered output. Fallback hits are logged and
    /// recorded in [`Self::missing_keys`].
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.table.get(self.active, key) {
            return text;
        }

        if self.missing.record(self.active, key) {
            tracing::warn!(
                target: "anthera::i18n::missing",
                locale = %self.active,
                key,
                "Missing translation, falling back to key"
            );
        }

        if key.is_empty() { EMPTY_KEY_FALLBACK } else { key }
    }

    /// Typed lookup. Uses the table entry (overrides included) and falls
    /// back to the compile-time string.
    #[must_use]
    pub fn tr(&self, key: TranslationKey) -> &str {
        self.table.get(self.active, key.as_str()).unwrap_or_else(|| key.builtin(self.active))
    }

    #[must_use]
    pub const fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Fallback hits recorded so far.
    #[must_use]
    pub const fn missing_keys(&self) -> &MissingKeyLog {
        &self.missing
    }
}

impl std::fmt::Debug for LocaleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleCatalog")
            .field("active", &self.active)
            .field("supported", &self.supported)
            .field("table", &"<TranslationTable>")
            .field("store", &"<dyn PreferenceStore>")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::i18n::MissingKey;
    use crate::store::MemoryStore;

    fn catalog_with(store: Arc<dyn PreferenceStore>, options: &LocaleOptions) -> LocaleCatalog {
        LocaleCatalog::initialize(store, TranslationTable::builtin(), options)
    }

    #[fixture]
    fn store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    #[rstest]
    #[case::unsupported_code(Some("fr"), Locale::It)]
    #[case::supported_code(Some("en"), Locale::En)]
    #[case::region_tag(Some("en-GB"), Locale::It)]
    #[case::uppercase(Some("EN"), Locale::It)]
    #[case::garbage(Some(""), Locale::It)]
    #[case::absent(None, Locale::It)]
    fn initial_locale_resolution(#[case] persisted: Option<&str>, #[case] expected: Locale) {
        let options = LocaleOptions::default();

        assert_that!(resolve_initial_locale(persisted, &options), eq(expected));
    }

    #[rstest]
    fn persisted_locale_outside_supported_set_uses_default() {
        let options =
            LocaleOptions { default_locale: Locale::It, supported_locales: vec![Locale::It] };

        assert_that!(resolve_initial_locale(Some("en"), &options), eq(Locale::It));
    }

    #[rstest]
    #[case(Locale::It, "Chi siamo")]
    #[case(Locale::En, "About")]
    fn set_locale_switches_translation(
        store: Arc<MemoryStore>,
        #[case] locale: Locale,
        #[case] expected: &str,
    ) {
        let mut catalog = catalog_with(store.clone(), &LocaleOptions::default());

        catalog.set_locale(locale).unwrap();

        assert_that!(catalog.current_locale(), eq(locale));
        assert_that!(catalog.translate("nav.about"), eq(expected));
        assert_that!(catalog.tr(TranslationKey::NavAbout), eq(expected));
        assert_that!(store.get(LOCALE_KEY), some(eq(locale.code())));
    }

    #[rstest]
    fn unsupported_locale_is_rejected(store: Arc<MemoryStore>) {
        let options =
            LocaleOptions { default_locale: Locale::It, supported_locales: vec![Locale::It] };
        let mut catalog = catalog_with(store.clone(), &options);

        let result = catalog.set_locale(Locale::En);

        assert_eq!(result, Err(LocaleError::UnsupportedLocale { code: "en".to_string() }));
        assert_that!(catalog.current_locale(), eq(Locale::It));
        assert_that!(store.get(LOCALE_KEY), none());
    }

    #[rstest]
    fn unknown_code_is_rejected(store: Arc<MemoryStore>) {
        let mut catalog = catalog_with(store, &LocaleOptions::default());

        let result = catalog.set_locale_code("xx");

        assert_eq!(result, Err(LocaleError::UnsupportedLocale { code: "xx".to_string() }));
        assert_that!(catalog.current_locale(), eq(Locale::It));
    }

    #[rstest]
    fn set_locale_code_accepts_region_tags(store: Arc<MemoryStore>) {
        let mut catalog = catalog_with(store, &LocaleOptions::default());

        assert_eq!(catalog.set_locale_code("EN-us"), Ok(Locale::En));
        assert_that!(catalog.current_locale(), eq(Locale::En));
    }

    #[rstest]
    fn missing_key_falls_back_to_key(store: Arc<MemoryStore>) {
        let catalog = catalog_with(store, &LocaleOptions::default());

        let first = catalog.translate("nonexistent.key");
        let second = catalog.translate("nonexistent.key");

        assert_that!(first, eq("nonexistent.key"));
        assert_that!(second, eq(first));
        assert_eq!(
            catalog.missing_keys().snapshot(),
            vec![MissingKey { locale: Locale::It, key: "nonexistent.key".to_string() }]
        );
    }

    #[rstest]
    fn empty_key_never_renders_empty(store: Arc<MemoryStore>) {
        let catalog = catalog_with(store, &LocaleOptions::default());

        assert_that!(catalog.translate(""), eq(EMPTY_KEY_FALLBACK));
    }

    #[rstest]
    fn normal_resolution_is_not_recorded(store: Arc<MemoryStore>) {
        let catalog = catalog_with(store, &LocaleOptions::default());

        let _ = catalog.translate("home.hero.title1");

        assert_that!(catalog.missing_keys().is_empty(), eq(true));
    }

    #[rstest]
    fn toggle_cycles_supported_locales(store: Arc<MemoryStore>) {
        let mut catalog = catalog_with(store.clone(), &LocaleOptions::default());

        assert_that!(catalog.next_locale(), eq(Locale::En));
        assert_that!(catalog.toggle_locale(), eq(Locale::En));
        assert_that!(catalog.toggle_locale(), eq(Locale::It));
        assert_that!(store.get(LOCALE_KEY), some(eq("it")));
    }

    #[rstest]
    fn toggle_with_single_locale_stays(store: Arc<MemoryStore>) {
        let options =
            LocaleOptions { default_locale: Locale::En, supported_locales: Vec::new() };
        let mut catalog = catalog_with(store.clone(), &options);

        assert_eq!(catalog.supported_locales(), &[Locale::En]);
        assert_that!(catalog.toggle_locale(), eq(Locale::En));
        assert_that!(store.get(LOCALE_KEY), none());
    }

    #[rstest]
    fn initialize_is_idempotent(store: Arc<MemoryStore>) {
        store.set(LOCALE_KEY, "en");

        let first = catalog_with(store.clone(), &LocaleOptions::default());
        let second = catalog_with(store, &LocaleOptions::default());

        assert_that!(first.current_locale(), eq(second.current_locale()));
        assert_that!(first.current_locale(), eq(Locale::En));
    }

    #[rstest]
    fn empty_override_is_never_rendered(store: Arc<MemoryStore>) {
        let mut table = TranslationTable::builtin();
        table.insert(Locale::It, "nav.about", "");
        let catalog = LocaleCatalog::initialize(store, table, &LocaleOptions::default());

        assert_that!(catalog.translate("nav.about"), eq("nav.about"));
        assert_that!(catalog.tr(TranslationKey::NavAbout), eq("Chi siamo"));
        assert_eq!(
            catalog.missing_keys().snapshot(),
            vec![MissingKey { locale: Locale::It, key: "nav.about".to_string() }]
        );
    }

    #[rstest]
    fn typed_lookup_falls_back_to_builtin(store: Arc<MemoryStore>) {
        let catalog = LocaleCatalog::initialize(
            store,
            TranslationTable::new(),
            &LocaleOptions::default(),
        );

        assert_that!(catalog.tr(TranslationKey::NavProducts), eq("Prodotti"));
        assert_that!(catalog.translate("nav.products"), eq("nav.products"));
    }
}
