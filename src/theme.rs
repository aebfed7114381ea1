//! Light/dark theme preference.
//!
//! [`ThemePreference`] owns the active [`Theme`], persists it through a
//! [`PreferenceStore`] and mirrors every change onto a [`ThemeApplier`], the
//! one side channel the core writes to outside its own state.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::{
    Arc,
    Mutex,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::store::PreferenceStore;

/// Store slot holding the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Visual mode of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme '{0}', expected \"dark\" or \"light\"")]
pub struct ParseThemeError(String);

impl Theme {
    pub const ALL: [Self; 2] = [Self::Dark, Self::Light];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other member of the pair.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host platform's preferred color scheme.
///
/// Only consulted at initialization when neither a persisted choice nor an
/// explicit default exists.
pub trait AmbientScheme {
    /// Returns the platform preference, or `None` when the host reports none.
    fn ambient_scheme(&self) -> Option<Theme>;
}

/// A fixed signal: `Some(theme)` always reports `theme`, `None` reports nothing.
impl AmbientScheme for Option<Theme> {
    fn ambient_scheme(&self) -> Option<Theme> {
        *self
    }
}

/// Receives the applied theme whenever it changes.
pub trait ThemeApplier: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// Models the `class` attribute of the document root.
///
/// The rendering layer styles the page with the `dark` class; light mode is
/// the absence of that class.
#[derive(Debug, Default)]
pub struct RootThemeAttribute {
    /// Current class list of the root element
    classes: Mutex<BTreeSet<String>>,
}

impl RootThemeAttribute {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Class list as it would be rendered, space separated.
    #[must_use]
    pub fn class_attribute(&self) -> String {
        self.classes
            .lock()
            .map(|classes| classes.iter().map(String::as_str).collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    /// Theme implied by the current class list.
    #[must_use]
    pub fn applied(&self) -> Theme {
        let is_dark = self.classes.lock().is_ok_and(|classes| classes.contains("dark"));
        if is_dark { Theme::Dark } else { Theme::Light }
    }
}

impl ThemeApplier for RootThemeAttribute {
    fn apply(&self, theme: Theme) {
        let Ok(mut classes) = self.classes.lock() else {
            tracing::warn!(%theme, "Root theme attribute lock poisoned, theme not applied");
            return;
        };
        match theme {
            Theme::Dark => classes.insert("dark".to_string()),
            Theme::Light => classes.remove("dark"),
        };
        tracing::trace!(%theme, "Applied theme to document root");
    }
}

/// Construction options for [`ThemePreference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Explicit default. When set, it wins over the ambient signal.
    pub default_theme: Option<Theme>,
    /// When `false`, the default is forced and toggling does nothing.
    pub switchable: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self { default_theme: Some(Theme::Dark), switchable: true }
    }
}

/// Where the initial theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// Provider is not switchable; the default is forced.
    Forced,
    /// A recognized value was read from the store.
    Persisted,
    /// The explicitly configured default.
    Default,
    /// The platform's ambient scheme.
    Ambient,
    /// Nothing else applied.
    Fallback,
}

/// Picks the initial theme.
///
/// Order: forced default (non-switchable) > persisted choice > explicit
/// default > ambient signal > [`Theme::Dark`].
#[must_use]
pub fn resolve_initial_theme(
    persisted: Option<&str>,
    options: ThemeOptions,
    ambient: &dyn AmbientScheme,
) -> (Theme, ThemeSource) {
    if !options.switchable {
        return (options.default_theme.unwrap_or_default(), ThemeSource::Forced);
    }

    if let Some(raw) = persisted {
        match raw.parse::<Theme>() {
            Ok(theme) => return (theme, ThemeSource::Persisted),
            Err(err) => tracing::debug!(%err, "Ignoring persisted theme"),
        }
    }

    if let Some(theme) = options.default_theme {
        return (theme, ThemeSource::Default);
    }

    ambient
        .ambient_scheme()
        .map_or((Theme::Dark, ThemeSource::Fallback), |theme| (theme, ThemeSource::Ambient))
}

/// Owner of the active theme.
pub struct ThemePreference {
    /// Active theme
    current: Theme,
    /// Origin of the initial value
    source: ThemeSource,
    /// Whether the user may change the theme
    switchable: bool,
    /// Persistence backend
    store: Arc<dyn PreferenceStore>,
    /// Side channel notified on every change
    applier: Arc<dyn ThemeApplier>,
}

impl ThemePreference {
    /// Reads the persisted theme once, resolves the initial value and
    /// applies it.
    pub fn initialize(
        store: Arc<dyn PreferenceStore>,
        options: ThemeOptions,
        ambient: &dyn AmbientScheme,
        applier: Arc<dyn ThemeApplier>,
    ) -> Self {
        let persisted = if options.switchable { store.get(THEME_KEY) } else { None };
        let (current, source) = resolve_initial_theme(persisted.as_deref(), options, ambient);
        tracing::debug!(theme = %current, ?source, "Theme initialized");

        applier.apply(current);

        Self { current, source, switchable: options.switchable, store, applier }
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub const fn source(&self) -> ThemeSource {
        self.source
    }

    #[must_use]
    pub const fn is_switchable(&self) -> bool {
        self.switchable
    }

    /// Flips the theme, persists and applies it, and returns the new value.
    ///
    /// Returns the current theme unchanged when the provider is not
    /// switchable.
    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.current.toggled())
    }

    /// Sets the theme explicitly. Same switchable and persistence rules as
    /// [`Self::toggle`]. Setting the active theme again is a no-op.
    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        if !self.switchable {
            tracing::debug!(theme = %self.current, "Theme is not switchable, ignoring change");
            return self.current;
        }
        if theme == self.current {
            return self.current;
        }

        self.current = theme;
        self.applier.apply(theme);
        self.store.set(THEME_KEY, theme.as_str());
        tracing::debug!(%theme, "Theme changed");

        self.current
    }
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("current", &self.current)
            .field("source", &self.source)
            .field("switchable", &self.switchable)
            .field("store", &"<dyn PreferenceStore>")
            .field("applier", &"<dyn ThemeApplier>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::store::{
        MemoryStore,
        UnavailableStore,
    };

    fn init(
        store: Arc<dyn PreferenceStore>,
        options: ThemeOptions,
        ambient: Option<Theme>,
    ) -> (ThemePreference, Arc<RootThemeAttribute>) {
        let root = Arc::new(RootThemeAttribute::new());
        let preference = ThemePreference::initialize(store, options, &ambient, root.clone());
        (preference, root)
    }

    const SWITCHABLE_NO_DEFAULT: ThemeOptions =
        ThemeOptions { default_theme: None, switchable: true };

    #[rstest]
    #[case(Theme::Dark, Theme::Light)]
    #[case(Theme::Light, Theme::Dark)]
    fn toggle_yields_the_other_theme(#[case] start: Theme, #[case] expected: Theme) {
        let store = Arc::new(MemoryStore::with_entries([(THEME_KEY, start.as_str())]));
        let (mut preference, root) = init(store.clone(), ThemeOptions::default(), None);

        let toggled = preference.toggle();

        assert_that!(toggled, eq(expected));
        assert_that!(preference.current(), eq(expected));
        assert_that!(root.applied(), eq(expected));
        assert_that!(store.get(THEME_KEY), some(eq(expected.as_str())));
    }

    #[rstest]
    #[case::persisted_wins_over_default(Some("light"), Some(Theme::Dark), None, Theme::Light, ThemeSource::Persisted)]
    #[case::default_wins_over_ambient(None, Some(Theme::Dark), Some(Theme::Light), Theme::Dark, ThemeSource::Default)]
    #[case::ambient_without_default(None, None, Some(Theme::Light), Theme::Light, ThemeSource::Ambient)]
    #[case::unrecognized_persisted_value(Some("sepia"), None, Some(Theme::Light), Theme::Light, ThemeSource::Ambient)]
    #[case::nothing_available(None, None, None, Theme::Dark, ThemeSource::Fallback)]
    fn initial_theme_resolution(
        #[case] persisted: Option<&str>,
        #[case] default_theme: Option<Theme>,
        #[case] ambient: Option<Theme>,
        #[case] expected: Theme,
        #[case] expected_source: ThemeSource,
    ) {
        let options = ThemeOptions { default_theme, switchable: true };

        let resolved = resolve_initial_theme(persisted, options, &ambient);

        assert_that!(resolved, eq((expected, expected_source)));
    }

    #[rstest]
    fn fresh_start_follows_ambient_light() {
        let (preference, root) =
            init(Arc::new(MemoryStore::new()), SWITCHABLE_NO_DEFAULT, Some(Theme::Light));

        assert_that!(preference.current(), eq(Theme::Light));
        assert_that!(root.class_attribute(), eq(""));
    }

    #[rstest]
    fn non_switchable_forces_default() {
        let store = Arc::new(MemoryStore::with_entries([(THEME_KEY, "light")]));
        let options = ThemeOptions { default_theme: Some(Theme::Dark), switchable: false };
        let (mut preference, root) = init(store.clone(), options, Some(Theme::Light));

        for _ in 0..3 {
            assert_that!(preference.toggle(), eq(Theme::Dark));
        }

        assert_that!(preference.current(), eq(Theme::Dark));
        assert_that!(preference.source(), eq(ThemeSource::Forced));
        assert_that!(root.class_attribute(), eq("dark"));
        // the persisted value is left untouched
        assert_that!(store.get(THEME_KEY), some(eq("light")));
    }

    #[rstest]
    fn initialize_is_idempotent() {
        let store: Arc<dyn PreferenceStore> =
            Arc::new(MemoryStore::with_entries([(THEME_KEY, "light")]));

        let (first, _) = init(store.clone(), ThemeOptions::default(), None);
        let (second, _) = init(store, ThemeOptions::default(), None);

        assert_that!(first.current(), eq(second.current()));
    }

    #[rstest]
    fn initialize_does_not_persist() {
        let store = Arc::new(MemoryStore::new());

        let _ = init(store.clone(), SWITCHABLE_NO_DEFAULT, Some(Theme::Light));

        assert_that!(store.get(THEME_KEY), none());
    }

    #[rstest]
    fn set_theme_to_current_is_noop() {
        let store = Arc::new(MemoryStore::new());
        let (mut preference, _) = init(store.clone(), ThemeOptions::default(), None);

        assert_that!(preference.set_theme(Theme::Dark), eq(Theme::Dark));
        assert_that!(store.get(THEME_KEY), none());
    }

    #[rstest]
    fn toggle_works_without_storage() {
        let (mut preference, _) =
            init(Arc::new(UnavailableStore), ThemeOptions::default(), None);

        assert_that!(preference.toggle(), eq(Theme::Light));
        assert_that!(preference.current(), eq(Theme::Light));
    }

    #[rstest]
    #[case("dark", Ok(Theme::Dark))]
    #[case("light", Ok(Theme::Light))]
    #[case("Dark", Err(ParseThemeError("Dark".to_string())))]
    #[case("", Err(ParseThemeError(String::new())))]
    fn parse_theme(#[case] raw: &str, #[case] expected: Result<Theme, ParseThemeError>) {
        assert_eq!(raw.parse::<Theme>(), expected);
    }

    #[rstest]
    fn root_attribute_tracks_dark_class() {
        let root = RootThemeAttribute::new();

        root.apply(Theme::Dark);
        assert_that!(root.class_attribute(), eq("dark"));

        root.apply(Theme::Light);
        assert_that!(root.class_attribute(), eq(""));
        assert_that!(root.applied(), eq(Theme::Light));
    }
}
