//! Persisted key-value storage for user preferences.
//!
//! Storage failures never reach callers: [`PreferenceStore::get`] treats every
//! error as an absent value and [`PreferenceStore::set`] drops failed writes
//! after logging them.

/// JSON file backed store
mod file;
/// In-process store
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
use thiserror::Error;

/// Errors raised inside a storage backend.
///
/// These are absorbed at the [`PreferenceStore`] boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Preference storage is unavailable")]
    Unavailable,

    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode or decode preferences: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Preference storage lock was poisoned")]
    Poisoned,
}

/// Durable key-value access used by the theme and locale providers.
///
/// Backends implement the fallible `read`/`write` pair; consumers call the
/// provided `get`/`set`, which degrade instead of failing.
pub trait PreferenceStore: Send + Sync {
    /// Reads the raw value stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Returns the stored value, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String> {
        match self.read(key) {
            Ok(value) => value,
            Err(StorageError::Unavailable) => {
                tracing::debug!(key, "Preference storage unavailable, using default");
                None
            }
            Err(err) => {
                tracing::warn!(key, %err, "Failed to read preference, using default");
                None
            }
        }
    }

    /// Best-effort write. Failures are logged and swallowed.
    fn set(&self, key: &str, value: &str) {
        match self.write(key, value) {
            Ok(()) => tracing::debug!(key, value, "Preference persisted"),
            Err(StorageError::Unavailable) => {
                tracing::debug!(key, "Preference storage unavailable, write dropped");
            }
            Err(err) => tracing::warn!(key, %err, "Failed to persist preference"),
        }
    }
}

/// A store with no backing storage (privacy mode, disabled storage,
/// non-browser hosts). Every read is absent and every write is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// Backend whose every operation fails with an I/O error.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        }
    }

    #[rstest]
    fn unavailable_store_reads_as_absent() {
        let store = UnavailableStore;

        store.set("theme", "light");

        assert_that!(store.get("theme"), none());
    }

    #[rstest]
    fn broken_backend_errors_are_absorbed() {
        let store = BrokenStore;

        store.set("locale", "en");

        assert_that!(store.get("locale"), none());
        assert_that!(store.read("locale"), err(anything()));
    }

    #[rstest]
    fn storage_error_messages() {
        assert_that!(
            StorageError::Unavailable.to_string(),
            eq("Preference storage is unavailable")
        );
        assert_that!(StorageError::Poisoned.to_string(), contains_substring("poisoned"));
    }
}
