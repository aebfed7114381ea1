//! Workspace scan for translation override files.

use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use super::{
    TranslationFileError,
    TranslationTable,
    load_workspace_translation_file,
};
use crate::config::{
    MatcherError,
    TranslationFileMatcher,
    TranslationFilesConfig,
};

/// Outcome of merging workspace overrides into a table.
#[derive(Debug, Default)]
pub struct OverrideSummary {
    /// Files merged, in merge order
    pub loaded: Vec<PathBuf>,
    /// Files that matched but could not be loaded
    pub failed: Vec<TranslationFileError>,
}

/// Finds translation files under the matcher's workspace root.
///
/// Honors `.gitignore`. Results are sorted so merge order is stable.
#[must_use]
pub fn discover_translation_files(matcher: &TranslationFileMatcher) -> Vec<PathBuf> {
    let workspace_path = matcher.workspace_root();
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(workspace_path)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(workspace_path) else {
            continue;
        };
        if matcher.is_translation_file_relative(relative_path) {
            found_files.push(path.to_path_buf());
        }
    }

    found_files.sort();
    tracing::debug!(
        workspace = %workspace_path.display(),
        count = found_files.len(),
        "Discovered translation files"
    );
    found_files
}

/// Loads every discovered file into `table`.
///
/// A file that fails to load is logged and skipped; the rest still merge.
pub fn merge_workspace_overrides(
    table: &mut TranslationTable,
    matcher: &TranslationFileMatcher,
    separator: &str,
) -> OverrideSummary {
    let mut summary = OverrideSummary::default();

    for path in discover_translation_files(matcher) {
        match load_workspace_translation_file(matcher.workspace_root(), &path, separator) {
            Ok(file) => {
                table.merge_file(&file);
                summary.loaded.push(path);
            }
            Err(err) => {
                tracing::warn!(%err, "Skipping translation file");
                summary.failed.push(err);
            }
        }
    }

    summary
}

/// Convenience for callers that only have a root path and patterns.
pub fn discover_in(
    workspace_root: &Path,
    config: &TranslationFilesConfig,
) -> Result<Vec<PathBuf>, MatcherError> {
    let matcher = TranslationFileMatcher::new(workspace_root.to_path_buf(), config)?;
    Ok(discover_translation_files(&matcher))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::i18n::{
        Locale,
        check_coverage,
    };
    use crate::test_utils::write_file;

    #[rstest]
    fn discovers_matching_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "public/locales/it.json", "{}");
        write_file(root, "locales/en.json", "{}");
        write_file(root, "node_modules/lib/locales/en.json", "{}");
        write_file(root, "src/main.ts", "");

        let files = discover_in(root, &TranslationFilesConfig::default()).unwrap();

        assert_eq!(files, vec![root.join("locales/en.json"), root.join("public/locales/it.json")]);
    }

    #[rstest]
    fn merge_overrides_skips_broken_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "locales/en.json", r#"{"nav": {"cta": "Book a call"}}"#);
        write_file(root, "locales/it.json", "{ broken");
        write_file(root, "locales/common.json", r#"{"a": "b"}"#);

        let matcher =
            TranslationFileMatcher::new(root.to_path_buf(), &TranslationFilesConfig::default())
                .unwrap();
        let mut table = TranslationTable::builtin();

        let summary = merge_workspace_overrides(&mut table, &matcher, ".");

        assert_that!(summary.loaded, len(eq(1)));
        assert_that!(summary.failed, len(eq(2)));
        assert_that!(table.get(Locale::En, "nav.cta"), some(eq("Book a call")));
        assert_that!(table.get(Locale::It, "nav.cta"), some(eq("Richiedi una demo")));
    }

    #[rstest]
    fn unsupported_file_under_locale_shaped_root_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("it_sites").join("anthera");
        write_file(&root, "locales/es.json", r#"{"nav": {"about": "Sobre nosotros"}}"#);
        write_file(&root, "locales/en_old/fr.json", r#"{"nav": {"about": "A propos"}}"#);
        let config = TranslationFilesConfig {
            include_patterns: vec!["**/locales/**/*.json".to_string()],
            ..TranslationFilesConfig::default()
        };
        let matcher = TranslationFileMatcher::new(root, &config).unwrap();
        let mut table = TranslationTable::builtin();

        let summary = merge_workspace_overrides(&mut table, &matcher, ".");

        assert_that!(summary.loaded, is_empty());
        assert_that!(summary.failed, len(eq(2)));
        assert_that!(table.get(Locale::It, "nav.about"), some(eq("Chi siamo")));
        assert_that!(table.get(Locale::En, "nav.about"), some(eq("About")));
    }

    #[rstest]
    fn empty_override_keeps_translation_visible() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "locales/it.json", r#"{"nav": {"about": ""}}"#);
        let matcher =
            TranslationFileMatcher::new(root.to_path_buf(), &TranslationFilesConfig::default())
                .unwrap();
        let mut table = TranslationTable::builtin();

        merge_workspace_overrides(&mut table, &matcher, ".");

        assert_that!(table.get(Locale::It, "nav.about"), none());
        assert_that!(check_coverage(&table, &Locale::ALL).is_complete(), eq(false));
    }
}
