//! Preference store persisted as a flat JSON object on disk.

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Mutex;

use super::{
    PreferenceStore,
    StorageError,
};

/// Persists preferences to a JSON file such as `{"theme": "light"}`.
///
/// The file is read once when the store is opened. Every write rewrites the
/// whole file. A missing, unreadable or corrupt file opens as an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Location of the backing file
    path: PathBuf,
    /// Entries loaded at open time plus subsequent writes
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, degrading to an empty store on failure.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::load(&path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "Ignoring unreadable preference file");
                BTreeMap::new()
            }
        };

        Self { path, entries: Mutex::new(entries) }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the backing file.
    fn load(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        if !path.exists() {
            tracing::debug!("Preference file not found: {:?}", path);
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes `entries` to the backing file, creating parent directories.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }
}
