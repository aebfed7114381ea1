//! Missing translation reporting.
//!
//! Missing keys never fail a lookup. They surface here instead: at runtime
//! through [`MissingKeyLog`], and ahead of time through [`check_coverage`].

use std::collections::{
    BTreeMap,
    BTreeSet,
};
use std::sync::Mutex;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use super::{
    Locale,
    TranslationTable,
};

/// A `(locale, key)` pair that resolved through the key fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MissingKey {
    pub locale: Locale,
    pub key: String,
}

/// Default number of distinct pairs a [`MissingKeyLog`] keeps.
pub const MISSING_KEY_LOG_LIMIT: usize = 1024;

/// Records translation lookups that fell back to the bare key.
///
/// Holds at most `limit` distinct pairs; hits beyond that are counted in
/// [`Self::dropped`] but not stored.
#[derive(Debug)]
pub struct MissingKeyLog {
    /// Distinct fallback hits
    hits: Mutex<BTreeSet<MissingKey>>,
    /// Maximum number of stored pairs
    limit: usize,
    /// New pairs not stored because the log was full
    dropped: AtomicUsize,
}

impl Default for MissingKeyLog {
    fn default() -> Self {
        Self::with_limit(MISSING_KEY_LOG_LIMIT)
    }
}

impl MissingKeyLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { hits: Mutex::new(BTreeSet::new()), limit, dropped: AtomicUsize::new(0) }
    }

    /// Records a fallback hit. Returns `true` the first time a pair is
    /// stored; `false` for repeats and once the log is full.
    pub fn record(&self, locale: Locale, key: &str) -> bool {
        let Ok(mut hits) = self.hits.lock() else {
            return false;
        };
        let missing = MissingKey { locale, key: key.to_string() };
        if hits.contains(&missing) {
            return false;
        }
        if hits.len() >= self.limit {
            if self.dropped.fetch_add(1, Ordering::Relaxed) == 0 {
                tracing::warn!(limit = self.limit, "Missing key log is full, new keys are not stored");
            }
            return false;
        }
        hits.insert(missing)
    }

    /// Number of new pairs rejected because the log was full.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Sorted copy of every recorded pair.
    #[must_use]
    pub fn snapshot(&self) -> Vec<MissingKey> {
        self.hits.lock().map(|hits| hits.iter().cloned().collect()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.lock().is_ok_and(|hits| hits.is_empty())
    }

    pub fn clear(&self) {
        if let Ok(mut hits) = self.hits.lock() {
            hits.clear();
        }
        self.dropped.store(0, Ordering::Relaxed);
    }
}

/// Keys missing from some of the checked locales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// Checked locales
    pub locales: Vec<Locale>,
    /// Key to the locales that lack it
    pub missing: BTreeMap<String, Vec<Locale>>,
}

impl CoverageReport {
    /// `true` when every key exists in every checked locale.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Flattened `(locale, key)` view, sorted by key.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<MissingKey> {
        self.missing
            .iter()
            .flat_map(|(key, locales)| {
                locales.iter().map(|locale| MissingKey { locale: *locale, key: key.clone() })
            })
            .collect()
    }
}

/// Checks that every key defined for any of `locales` exists in all of them.
#[must_use]
pub fn check_coverage(table: &TranslationTable, locales: &[Locale]) -> CoverageReport {
    let all_keys: BTreeSet<&str> =
        locales.iter().flat_map(|locale| table.keys(*locale)).collect();

    let mut missing = BTreeMap::new();
    for key in all_keys {
        let lacking: Vec<Locale> =
            locales.iter().copied().filter(|locale| !table.contains(*locale, key)).collect();
        if !lacking.is_empty() {
            tracing::debug!(key, ?lacking, "Translation missing");
            missing.insert(key.to_string(), lacking);
        }
    }

    CoverageReport { locales: locales.to_vec(), missing }
}
