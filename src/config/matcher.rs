//! Glob matcher for translation override files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::TranslationFilesConfig;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidTranslationPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches workspace files against the configured translation patterns.
#[derive(Debug, Clone)]
pub struct TranslationFileMatcher {
    /// Root the patterns are relative to
    workspace_root: PathBuf,
    /// Compiled `includePatterns`
    include_set: GlobSet,
    /// Compiled `excludePatterns`
    exclude_set: GlobSet,
}

impl TranslationFileMatcher {
    /// Creates a new matcher from settings.
    pub fn new(
        workspace_root: PathBuf,
        config: &TranslationFilesConfig,
    ) -> Result<Self, MatcherError> {
        let include_set = Self::build_glob_set(&config.include_patterns, |pattern, source| {
            MatcherError::InvalidTranslationPattern { pattern, source }
        })?;

        let exclude_set = Self::build_glob_set(&config.exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        Ok(Self { workspace_root, include_set, exclude_set })
    }

    /// Compiles `patterns`, reporting the first invalid one through `make_error`.
    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Returns true if the path matches `includePatterns` but not
    /// `excludePatterns`.
    ///
    /// The path must be absolute and under the workspace root.
    #[must_use]
    pub fn is_translation_file(&self, absolute_path: &Path) -> bool {
        let Ok(relative_path) = absolute_path.strip_prefix(&self.workspace_root) else {
            return false;
        };

        self.is_translation_file_relative(relative_path)
    }

    /// Same as [`Self::is_translation_file`] for a path relative to the
    /// workspace root.
    #[must_use]
    pub fn is_translation_file_relative(&self, relative_path: &Path) -> bool {
        self.include_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[fixture]
    fn matcher() -> TranslationFileMatcher {
        TranslationFileMatcher::new(
            PathBuf::from("/workspace"),
            &TranslationFilesConfig::default(),
        )
        .unwrap()
    }

    #[rstest]
    #[case::root_locales("locales/en.json", true)]
    #[case::nested_locales("site/public/locales/it.json", true)]
    #[case::wrong_extension("locales/en.yaml", false)]
    #[case::not_in_locales("src/en.json", false)]
    #[case::excluded_dependency("node_modules/pkg/locales/en.json", false)]
    #[case::excluded_build_output("target/locales/en.json", false)]
    fn relative_paths(
        matcher: TranslationFileMatcher,
        #[case] path: &str,
        #[case] expected: bool,
    ) {
        assert_that!(matcher.is_translation_file_relative(Path::new(path)), eq(expected));
    }

    #[rstest]
    fn absolute_paths_outside_workspace_never_match(matcher: TranslationFileMatcher) {
        assert_that!(matcher.is_translation_file(Path::new("/workspace/locales/en.json")), eq(true));
        assert_that!(matcher.is_translation_file(Path::new("/elsewhere/locales/en.json")), eq(false));
    }

    #[rstest]
    fn invalid_pattern_is_reported() {
        let config = TranslationFilesConfig {
            include_patterns: vec!["locales/*.{json".to_string()],
            exclude_patterns: vec![],
        };

        let result = TranslationFileMatcher::new(PathBuf::from("/workspace"), &config);

        assert!(matches!(result, Err(MatcherError::InvalidTranslationPattern { .. })));
    }
}
