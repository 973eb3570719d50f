//! Typed JSON access over a [`KeyValueBackend`].

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::backend::{KeyValueBackend, MemoryBackend};
use crate::error::Result;

/// Typed façade over a key-value backend.
///
/// `get` never fails: an absent key, a backend read error, or a document
/// that no longer decodes all yield the caller's default. `set` never fails
/// either: write errors are logged and swallowed, and the caller's in-memory
/// value stays authoritative until the next start.
///
/// # Example
///
/// ```
/// use jobtracker_core::storage::PersistentStore;
///
/// let store = PersistentStore::in_memory();
/// assert_eq!(store.get("language", "en".to_string()), "en");
///
/// store.set("language", "id");
/// assert_eq!(store.get("language", "en".to_string()), "id");
/// ```
#[derive(Clone)]
pub struct PersistentStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl PersistentStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Creates a store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Reads and decodes `key`, falling back to `default`.
    pub fn get<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read stored value, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored value is malformed, using default");
                default
            }
        }
    }

    /// Encodes and writes `value`, reporting failure to the caller.
    pub fn try_set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.backend.write(key, &raw)?;
        tracing::debug!(key, bytes = raw.len(), "Persisted value");
        Ok(())
    }

    /// Encodes and writes `value`. Failures are logged, not returned.
    pub fn set<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        if let Err(e) = self.try_set(key, value) {
            tracing::warn!(key, error = %e, "Failed to persist value, keeping in-memory state");
        }
    }
}

impl fmt::Debug for PersistentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobTrackerError;

    /// Backend whose writes always fail, like a browser over quota.
    struct ReadOnlyBackend(MemoryBackend);

    impl KeyValueBackend for ReadOnlyBackend {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.0.read(key)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(JobTrackerError::persistence("quota exceeded"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(JobTrackerError::persistence("quota exceeded"))
        }
    }

    #[test]
    fn test_get_absent_returns_default() {
        let store = PersistentStore::in_memory();
        let value: Vec<String> = store.get("jobs", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_get_malformed_returns_default() {
        let backend = MemoryBackend::with_entries([("theme", "{not json")]);
        let store = PersistentStore::new(Arc::new(backend));
        assert_eq!(store.get("theme", "system".to_string()), "system");
    }

    #[test]
    fn test_get_wrong_shape_returns_default() {
        let backend = MemoryBackend::with_entries([("jobs", "42")]);
        let store = PersistentStore::new(Arc::new(backend));
        let jobs: Vec<String> = store.get("jobs", Vec::new());
        assert!(jobs.is_empty());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = PersistentStore::in_memory();
        store.set("jobs", &vec![1, 2, 3]);
        let jobs: Vec<i32> = store.get("jobs", Vec::new());
        assert_eq!(jobs, vec![1, 2, 3]);
    }

    #[test]
    fn test_set_failure_is_swallowed() {
        let store = PersistentStore::new(Arc::new(ReadOnlyBackend(MemoryBackend::new())));
        store.set("theme", "dark");
        assert_eq!(store.get("theme", "system".to_string()), "system");

        let err = store.try_set("theme", "dark").unwrap_err();
        assert!(err.is_persistence());
    }

    #[test]
    fn test_option_none_persists_as_null() {
        let store = PersistentStore::in_memory();
        store.set("user", &Some("alice".to_string()));
        store.set::<Option<String>>("user", &None);
        let user: Option<String> = store.get("user", Some("default".to_string()));
        assert_eq!(user, None);
    }
}
