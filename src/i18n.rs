//! Locales, translation keys and lookup.

/// Active locale and lookup with fallback
mod catalog;
/// Missing-key tracking and coverage checks
mod diagnostics;
/// Workspace scan for override files
mod discovery;
/// Translation file parsing
mod file;
/// Statically enumerated keys and built-in strings
mod keys;
/// Supported locales
mod locale;
/// Locale-keyed translation entries
mod table;

pub use catalog::{
    EMPTY_KEY_FALLBACK,
    LOCALE_KEY,
    LocaleCatalog,
    LocaleOptions,
    resolve_initial_locale,
};
pub use diagnostics::{
    CoverageReport,
    MISSING_KEY_LOG_LIMIT,
    MissingKey,
    MissingKeyLog,
    check_coverage,
};
pub use discovery::{
    OverrideSummary,
    discover_in,
    discover_translation_files,
    merge_workspace_overrides,
};
pub use file::{
    TranslationFile,
    TranslationFileError,
    detect_locale_from_path,
    flatten_json,
    load_translation_file,
    load_workspace_translation_file,
    parse_translation_text,
};
pub use keys::TranslationKey;
pub use locale::{
    Locale,
    LocaleError,
    is_language_tag,
};
pub use table::TranslationTable;
