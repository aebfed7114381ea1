//! Supported display languages.

use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Errors raised when selecting a locale.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unsupported locale '{code}'")]
    UnsupportedLocale { code: String },
}

/// A display language for the site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Italian
    #[default]
    It,
    /// English
    En,
}

impl Locale {
    /// Every locale with a built-in catalog, in declaration order.
    pub const ALL: [Self; 2] = [Self::It, Self::En];

    /// Lowercase language code used for persistence and translation files.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::It => "it",
            Self::En => "en",
        }
    }

    /// Short uppercase label shown on the language switch (e.g. `EN`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::It => "IT",
            Self::En => "EN",
        }
    }

    /// Parses a language tag, ignoring case and any region subtag.
    ///
    /// `"en"`, `"EN"`, `"en-US"` and `"en_GB"` all resolve to [`Locale::En`].
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = normalize_language_code(value.trim());
        let primary = normalized.split('_').next().unwrap_or_default();
        Self::ALL.into_iter().find(|locale| locale.code() == primary)
    }

    /// Exact lowercase code match, as written to the preference store.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Strict language tag match used on file and directory names.
    ///
    /// Only a segment accepted by [`is_language_tag`] can name a locale, so
    /// `en_old` or `it_sites` never do.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        if !is_language_tag(tag) {
            return None;
        }
        let normalized = normalize_language_code(tag);
        Self::from_code(normalized.split('_').next().unwrap_or_default())
    }
}

/// Whether `tag` has the shape of a language tag, supported or not.
///
/// A two-letter code optionally followed by one region subtag of two letters
/// or three digits: `en`, `fr`, `en-US`, `it_IT`, `es-419`.
#[must_use]
pub fn is_language_tag(tag: &str) -> bool {
    let normalized = normalize_language_code(tag);
    let mut parts = normalized.split('_');
    let primary = parts.next().unwrap_or_default();
    if primary.len() != 2 || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    match (parts.next(), parts.next()) {
        (None, _) => true,
        (Some(region), None) => is_region_subtag(region),
        (Some(_), Some(_)) => false,
    }
}

/// Two ASCII letters or three ASCII digits.
fn is_region_subtag(region: &str) -> bool {
    (region.len() == 2 && region.bytes().all(|b| b.is_ascii_alphabetic()))
        || (region.len() == 3 && region.bytes().all(|b| b.is_ascii_digit()))
}

/// Normalize language code (lowercase and replace `-` with `_`)
fn normalize_language_code(code: &str) -> String {
    code.to_lowercase().replace('-', "_")
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LocaleError::UnsupportedLocale { code: s.to_string() })
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::italian("it", Some(Locale::It))]
    #[case::english("en", Some(Locale::En))]
    #[case::uppercase("EN", Some(Locale::En))]
    #[case::region_dash("en-US", Some(Locale::En))]
    #[case::region_underscore("it_IT", Some(Locale::It))]
    #[case::padded("  it ", Some(Locale::It))]
    #[case::french("fr", None)]
    #[case::empty("", None)]
    #[case::prefix_only("e", None)]
    fn parse_language_tags(#[case] value: &str, #[case] expected: Option<Locale>) {
        assert_that!(Locale::parse(value), eq(expected));
    }

    #[rstest]
    #[case::bare("en", Some(Locale::En))]
    #[case::region("it-IT", Some(Locale::It))]
    #[case::numeric_region("en_419", Some(Locale::En))]
    #[case::suffixed_dir("en_old", None)]
    #[case::suffixed_root("it_sites", None)]
    #[case::two_subtags("en-US-x", None)]
    #[case::unsupported("es", None)]
    fn strict_tags(#[case] tag: &str, #[case] expected: Option<Locale>) {
        assert_that!(Locale::from_tag(tag), eq(expected));
    }

    #[rstest]
    #[case::unsupported_code("fr", true)]
    #[case::unsupported_region("pt-BR", true)]
    #[case::word("json", false)]
    #[case::three_letters("app", false)]
    #[case::suffixed("en_old", false)]
    fn language_tag_shape(#[case] tag: &str, #[case] expected: bool) {
        assert_that!(is_language_tag(tag), eq(expected));
    }

    #[rstest]
    #[case::exact("en", Some(Locale::En))]
    #[case::region("en-GB", None)]
    #[case::uppercase("IT", None)]
    fn exact_codes(#[case] code: &str, #[case] expected: Option<Locale>) {
        assert_that!(Locale::from_code(code), eq(expected));
    }

    #[rstest]
    fn from_str_reports_unsupported_code() {
        let result = "xx".parse::<Locale>();

        assert_eq!(result, Err(LocaleError::UnsupportedLocale { code: "xx".to_string() }));
    }

    #[rstest]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Locale::En).unwrap();
        let parsed: Locale = serde_json::from_str("\"it\"").unwrap();

        assert_that!(json, eq("\"en\""));
        assert_that!(parsed, eq(Locale::It));
    }

    #[rstest]
    fn display_matches_code() {
        assert_that!(Locale::It.to_string(), eq("it"));
        assert_that!(Locale::En.label(), eq("EN"));
    }
}
