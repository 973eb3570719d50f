//! Directory-backed key-value storage.

use std::path::{Path, PathBuf};

use jobtracker_core::error::{JobTrackerError, Result};
use jobtracker_core::storage::KeyValueBackend;

use super::atomic_file;

/// Stores each key as `<dir>/<key>.json`.
///
/// Values are the JSON text handed over by `PersistentStore`; this backend
/// never inspects them. Writes are atomic per key.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Opens (and creates if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            JobTrackerError::persistence(format!(
                "Cannot create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        tracing::debug!(dir = %dir.display(), "Opened file backend");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(JobTrackerError::persistence(format!(
                "Invalid storage key '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        Ok(atomic_file::read_text(&path)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        atomic_file::write_text(&path, value)?;
        tracing::trace!(key, bytes = value.len(), "Wrote key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        Ok(atomic_file::remove(&path)?)
    }
}
