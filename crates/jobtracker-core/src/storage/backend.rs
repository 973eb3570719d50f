//! Raw key-value backend contract.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{JobTrackerError, Result};

/// Durable string storage addressed by key.
///
/// This trait abstracts the medium the job tracker persists into, so the
/// domain layer can run against a directory of files in production and an
/// in-memory map in tests. Implementations must write synchronously: a
/// `read` issued after a successful `write` observes the new value.
pub trait KeyValueBackend: Send + Sync {
    /// Returns the stored text for `key`, or `None` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the stored text for `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Backend that keeps everything in process memory.
///
/// Used by tests and by the CLI when no data directory can be resolved.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with raw entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

fn poisoned() -> JobTrackerError {
    JobTrackerError::persistence("memory backend lock poisoned")
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}
