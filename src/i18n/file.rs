//! Translation override files.
//!
//! Files are nested JSON objects flattened into dotted keys, one locale per
//! file. The locale is detected from the path: `locales/en.json`,
//! `messages/it-IT.json` and `translations/en/site.json` are all recognized.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;
use thiserror::Error;

use super::{
    Locale,
    is_language_tag,
};

#[derive(Error, Debug)]
pub enum TranslationFileError {
    #[error("Failed to read translation file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot detect a supported locale from path {path:?}")]
    UnknownLocale { path: PathBuf },
}

/// Flattened contents of one translation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub locale: Locale,
    pub file_path: PathBuf,
    /// Flattened translation key map (e.g., "nav.home" -> "Home").
    pub keys: HashMap<String, String>,
}

/// Detect locale from file path heuristically
///
/// Splits the path by '/' and '.', then searches backwards for the first part
/// shaped like a language tag. That part decides: a supported locale is
/// returned, any other language (`fr.json`) yields `None`.
#[must_use]
pub fn detect_locale_from_path(file_path: &Path) -> Option<Locale> {
    let path_str = file_path.to_string_lossy();
    let parts: Vec<&str> = path_str.split(['/', '\\', '.']).collect();

    let tag = parts.into_iter().rev().find(|part| is_language_tag(part))?;
    Locale::from_tag(tag)
}

/// Flatten nested JSON object into a separator-joined key map.
///
/// Arrays use index notation (`items[0]`), non-string scalars keep their JSON
/// text and `null` leaves are skipped.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use anthera_site::i18n::flatten_json;
///
/// let json = json!({
///     "nav": {
///         "home": "Home",
///         "about": "About"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("nav.home"), Some(&"Home".to_string()));
/// assert_eq!(flattened.get("nav.about"), Some(&"About".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive worker for [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Null => {}
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        Value::Bool(_) | Value::Number(_) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

/// Parses translation JSON text for an already known locale.
pub fn parse_translation_text(
    content: &str,
    locale: Locale,
    file_path: &Path,
    separator: &str,
) -> Result<TranslationFile, TranslationFileError> {
    let json: Value = serde_json::from_str(content)
        .map_err(|source| TranslationFileError::Parse { path: file_path.to_path_buf(), source })?;

    Ok(TranslationFile {
        locale,
        file_path: file_path.to_path_buf(),
        keys: flatten_json(&json, separator, None),
    })
}

/// Loads a translation file, detecting its locale from the path.
pub fn load_translation_file(
    file_path: &Path,
    separator: &str,
) -> Result<TranslationFile, TranslationFileError> {
    read_translation_file(file_path, file_path, separator)
}

/// Loads a file found under `workspace_root`.
///
/// Only the part of the path below the root is used to detect the locale, so
/// directories above the workspace never decide it.
pub fn load_workspace_translation_file(
    workspace_root: &Path,
    file_path: &Path,
    separator: &str,
) -> Result<TranslationFile, TranslationFileError> {
    let relative_path = file_path.strip_prefix(workspace_root).unwrap_or(file_path);
    read_translation_file(file_path, relative_path, separator)
}

/// Reads `file_path`, detecting the locale from `locale_path`.
fn read_translation_file(
    file_path: &Path,
    locale_path: &Path,
    separator: &str,
) -> Result<TranslationFile, TranslationFileError> {
    let locale = detect_locale_from_path(locale_path)
        .ok_or_else(|| TranslationFileError::UnknownLocale { path: file_path.to_path_buf() })?;

    let content = std::fs::read_to_string(file_path)
        .map_err(|source| TranslationFileError::Io { path: file_path.to_path_buf(), source })?;

    let file = parse_translation_text(&content, locale, file_path, separator)?;
    tracing::debug!(
        path = %file_path.display(),
        %locale,
        keys = file.keys.len(),
        "Loaded translation file"
    );

    Ok(file)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    #[case("locales/en.json", Some(Locale::En))]
    #[case("messages/it-IT.json", Some(Locale::It))]
    #[case("translations/en_US/site.json", Some(Locale::En))]
    #[case("locales/it/common.json", Some(Locale::It))]
    #[case("locales/fr.json", None)]
    #[case("locales/common.json", None)]
    #[case("locales/en_old/fr.json", None)]
    #[case("en/locales/es.json", None)]
    #[case("it_sites/anthera/locales/es.json", None)]
    #[case("locales/en_old/it.json", Some(Locale::It))]
    fn detect_locale(#[case] path: &str, #[case] expected: Option<Locale>) {
        assert_that!(detect_locale_from_path(Path::new(path)), eq(expected));
    }

    #[rstest]
    fn flatten_nested_objects_and_arrays() {
        let json = json!({
            "home": {
                "hero": { "title1": "Hello" },
                "badges": ["a", "b"]
            },
            "count": 3,
            "gone": null
        });

        let flattened = flatten_json(&json, ".", None);

        assert_that!(flattened.get("home.hero.title1"), some(eq("Hello")));
        assert_that!(flattened.get("home.badges[1]"), some(eq("b")));
        assert_that!(flattened.get("count"), some(eq("3")));
        assert_that!(flattened.get("gone"), none());
        assert_that!(flattened.len(), eq(4));
    }

    #[rstest]
    fn flatten_with_custom_separator() {
        let json = json!({ "nav": { "home": "Home" } });

        let flattened = flatten_json(&json, ":", None);

        assert_that!(flattened.get("nav:home"), some(eq("Home")));
    }

    #[rstest]
    fn load_file_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("locales");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("en.json");
        fs::write(&path, r#"{"nav": {"home": "Start"}}"#).unwrap();

        let file = load_translation_file(&path, ".").unwrap();

        assert_that!(file.locale, eq(Locale::En));
        assert_that!(file.keys.get("nav.home"), some(eq("Start")));
    }

    #[rstest]
    fn load_file_with_unknown_locale() {
        let result = load_translation_file(Path::new("locales/common.json"), ".");

        assert!(matches!(result, Err(TranslationFileError::UnknownLocale { .. })));
    }

    #[rstest]
    fn workspace_load_ignores_directories_above_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("en");
        let dir = root.join("locales");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("common.json");
        fs::write(&path, r#"{"nav": {"about": "Chi"}}"#).unwrap();

        let result = load_workspace_translation_file(&root, &path, ".");

        assert_that!(load_translation_file(&path, ".").unwrap().locale, eq(Locale::En));
        assert!(matches!(result, Err(TranslationFileError::UnknownLocale { .. })));
    }

    #[rstest]
    fn load_file_with_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("it.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_translation_file(&path, ".");

        assert!(matches!(result, Err(TranslationFileError::Parse { .. })));
    }
}
