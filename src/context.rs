//! Composition root handed to the view layer.
//!
//! A [`SiteContext`] is built once per session. Views read through `&`
//! accessors and change state only through the mutators defined here.

use std::sync::Arc;

use crate::config::SiteSettings;
use crate::i18n::{
    Locale,
    LocaleCatalog,
    LocaleError,
    LocaleOptions,
    TranslationKey,
    TranslationTable,
};
use crate::store::PreferenceStore;
use crate::theme::{
    AmbientScheme,
    RootThemeAttribute,
    Theme,
    ThemeApplier,
    ThemeOptions,
    ThemePreference,
};

/// Theme and locale providers sharing one preference store.
#[derive(Debug)]
pub struct SiteContext {
    /// Theme provider
    theme: ThemePreference,
    /// Locale provider
    locale: LocaleCatalog,
    /// Document root the theme is applied to
    root: Arc<RootThemeAttribute>,
}

impl SiteContext {
    /// Builds both providers over the built-in translation table.
    pub fn new(
        settings: &SiteSettings,
        store: Arc<dyn PreferenceStore>,
        ambient: &dyn AmbientScheme,
    ) -> Self {
        Self::with_table(settings, store, ambient, TranslationTable::builtin())
    }

    /// Builds both providers over a caller-supplied table.
    pub fn with_table(
        settings: &SiteSettings,
        store: Arc<dyn PreferenceStore>,
        ambient: &dyn AmbientScheme,
        table: TranslationTable,
    ) -> Self {
        let root = Arc::new(RootThemeAttribute::new());
        let applier: Arc<dyn ThemeApplier> = root.clone();
        let theme = ThemePreference::initialize(
            Arc::clone(&store),
            ThemeOptions::from(settings.theme),
            ambient,
            applier,
        );
        let locale = LocaleCatalog::initialize(store, table, &LocaleOptions::from(&settings.locale));

        Self { theme, locale, root }
    }

    #[must_use]
    pub const fn current_theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        self.theme.set_theme(theme)
    }

    #[must_use]
    pub const fn current_locale(&self) -> Locale {
        self.locale.current_locale()
    }

    pub fn set_locale(&mut self, locale: Locale) -> Result<(), LocaleError> {
        self.locale.set_locale(locale)
    }

    /// Sets the locale from a raw code such as `en-US`.
    pub fn set_locale_code(&mut self, code: &str) -> Result<Locale, LocaleError> {
        self.locale.set_locale_code(code)
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale.toggle_locale()
    }

    /// Resolves `key` in the active locale, falling back to the key itself.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.locale.translate(key)
    }

    #[must_use]
    pub fn tr(&self, key: TranslationKey) -> &str {
        self.locale.tr(key)
    }

    #[must_use]
    pub const fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    #[must_use]
    pub const fn locale(&self) -> &LocaleCatalog {
        &self.locale
    }

    /// Document root as last written by the theme provider.
    #[must_use]
    pub fn root(&self) -> &RootThemeAttribute {
        &self.root
    }
}
