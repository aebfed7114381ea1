//! Helpers shared by unit tests.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use crate::store::MemoryStore;

/// In-memory store pre-filled with `entries`.
pub(crate) fn store_with(entries: &[(&str, &str)]) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_entries(entries.iter().copied()))
}

/// Writes `content` to `root/relative`, creating parent directories.
pub(crate) fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}
