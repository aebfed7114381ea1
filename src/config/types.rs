use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::i18n::{
    Locale,
    LocaleOptions,
};
use crate::theme::{
    Theme,
    ThemeOptions,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "translationFiles.includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Site settings read from `.anthera-site.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub theme: ThemeSettings,
    pub locale: LocaleSettings,
    pub translation_files: TranslationFilesConfig,
    pub key_separator: String,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSettings {
    /// Explicit default theme.
    ///
    /// `null` lets the platform's ambient scheme decide on first visit.
    pub default_theme: Option<Theme>,

    /// When `false`, `defaultTheme` is forced and the theme toggle is inert.
    pub switchable: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self { default_theme: Some(Theme::Dark), switchable: true }
    }
}

impl From<ThemeSettings> for ThemeOptions {
    fn from(settings: ThemeSettings) -> Self {
        Self { default_theme: settings.default_theme, switchable: settings.switchable }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    pub default_locale: Locale,
    /// Selectable locales, in language switch order.
    pub supported_locales: Vec<Locale>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self { default_locale: Locale::It, supported_locales: vec![Locale::It, Locale::En] }
    }
}

impl From<&LocaleSettings> for LocaleOptions {
    fn from(settings: &LocaleSettings) -> Self {
        Self {
            default_locale: settings.default_locale,
            supported_locales: settings.supported_locales.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    /// Override files merged on top of the built-in catalog.
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec!["**/locales/*.json".to_string()],
            exclude_patterns: vec!["node_modules/**".to_string(), "target/**".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageConfig {
    /// When `false`, preferences live only for the current process.
    pub enabled: bool,
    /// Preference file, relative to the workspace root.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { enabled: true, path: PathBuf::from(".anthera/preferences.json") }
    }
}

impl SiteSettings {
    /// # Errors
    /// - Empty separator or storage path
    /// - Empty or duplicated supported locales
    /// - Default locale outside the supported locales
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        self.validate_locales(&mut errors);
        self.validate_translation_files(&mut errors);

        if self.storage.enabled && self.storage.path.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "storage.path",
                "The path cannot be empty. Example: \".anthera/preferences.json\", or set \"enabled\": false",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Checks the `locale` section.
    fn validate_locales(&self, errors: &mut Vec<ValidationError>) {
        let locale = &self.locale;

        if locale.supported_locales.is_empty() {
            errors.push(ValidationError::new(
                "locale.supportedLocales",
                "At least one locale is required. Example: [\"it\", \"en\"]",
            ));
        } else if !locale.supported_locales.contains(&locale.default_locale) {
            errors.push(ValidationError::new(
                "locale.defaultLocale",
                format!(
                    "The default locale '{}' must be listed in supportedLocales",
                    locale.default_locale
                ),
            ));
        }

        for (index, code) in locale.supported_locales.iter().enumerate() {
            if locale.supported_locales.iter().take(index).any(|seen| seen == code) {
                errors.push(ValidationError::new(
                    format!("locale.supportedLocales[{index}]"),
                    format!("Duplicate locale '{code}'"),
                ));
            }
        }
    }

    /// Checks the `translationFiles` glob patterns.
    fn validate_translation_files(&self, errors: &mut Vec<ValidationError>) {
        let files = &self.translation_files;

        for (index, pattern) in files.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("translationFiles.includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in files.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("translationFiles.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSettings::default(),
            locale: LocaleSettings::default(),
            translation_files: TranslationFilesConfig::default(),
            key_separator: ".".to_string(),
            storage: StorageConfig::default(),
        }
    }
}
