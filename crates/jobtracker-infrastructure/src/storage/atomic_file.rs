//! Atomic file operations.
//!
//! Every write goes to a temporary sibling, is fsynced, and is renamed over
//! the target while an exclusive lock file is held. A reader therefore sees
//! either the old document or the new one, never a torn write.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use jobtracker_core::JobTrackerError;

/// Errors that can occur during atomic file operations.
#[derive(Debug)]
pub enum AtomicFileError {
    /// File I/O error.
    Io(std::io::Error),
    /// The document could not be encoded or decoded as TOML.
    Toml(String),
    /// File locking error.
    Lock(String),
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::Io(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::Toml(e) => write!(f, "TOML error: {}", e),
            AtomicFileError::Lock(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::Io(e)
    }
}

impl From<AtomicFileError> for JobTrackerError {
    fn from(err: AtomicFileError) -> Self {
        match err {
            AtomicFileError::Io(e) => JobTrackerError::persistence(e.to_string()),
            AtomicFileError::Toml(message) => JobTrackerError::Serialization {
                format: "TOML".to_string(),
                message,
            },
            AtomicFileError::Lock(message) => JobTrackerError::persistence(message),
        }
    }
}

/// A typed TOML document written with [`write_text`].
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and decodes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and decoded
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicFileError> {
        match read_text(&self.path)? {
            Some(content) if !content.trim().is_empty() => toml::from_str(&content)
                .map(Some)
                .map_err(|e| AtomicFileError::Toml(e.to_string())),
            _ => Ok(None),
        }
    }

    /// Encodes `data` and replaces the file atomically.
    pub fn save(&self, data: &T) -> Result<(), AtomicFileError> {
        let content =
            toml::to_string_pretty(data).map_err(|e| AtomicFileError::Toml(e.to_string()))?;
        write_text(&self.path, &content)
    }

    /// Loads the file, or writes `default_value` to it when it is missing.
    pub fn load_or_create(&self, default_value: T) -> Result<T, AtomicFileError> {
        match self.load()? {
            Some(data) => Ok(data),
            None => {
                self.save(&default_value)?;
                Ok(default_value)
            }
        }
    }
}

/// Reads the whole file, or `None` when it does not exist.
pub fn read_text(path: &Path) -> Result<Option<String>, AtomicFileError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Replaces the file with `content` atomically.
///
/// Creates the parent directory when needed.
pub fn write_text(path: &Path, content: &str) -> Result<(), AtomicFileError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let _lock = FileLock::acquire(path)?;

    let tmp_path = temp_path(path)?;
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Removes the file under the lock. A missing file is not an error.
pub fn remove(path: &Path) -> Result<(), AtomicFileError> {
    if !path.exists() {
        return Ok(());
    }
    let _lock = FileLock::acquire(path)?;
    match fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

fn temp_path(path: &Path) -> Result<PathBuf, AtomicFileError> {
    let invalid = |message: &str| {
        AtomicFileError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            message,
        ))
    };
    let parent = path
        .parent()
        .ok_or_else(|| invalid("Path has no parent directory"))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| invalid("Path has no file name"))?;

    Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
}

/// A file lock guard that releases the lock when dropped.
///
/// The lock file itself stays on disk: every writer must contend on the same
/// inode.
struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicFileError> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicFileError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn sample() -> Sample {
        Sample {
            name: "test".to_string(),
            count: 42,
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Sample>::new(temp_dir.path().join("sample.toml"));
        file.save(&sample()).unwrap();
        assert_eq!(file.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Sample>::new(temp_dir.path().join("missing.toml"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_or_create_writes_default_once() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Sample>::new(temp_dir.path().join("nested/config.toml"));

        assert_eq!(file.load_or_create(sample()).unwrap(), sample());
        assert!(file.path().exists());

        let other = Sample {
            name: "other".to_string(),
            count: 0,
        };
        assert_eq!(file.load_or_create(other).unwrap(), sample());
    }

    #[test]
    fn test_malformed_document_is_a_toml_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "name = ").unwrap();

        let err = AtomicTomlFile::<Sample>::new(path).load().unwrap_err();
        assert!(matches!(err, AtomicFileError::Toml(_)));
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jobs.json");

        write_text(&path, "[]").unwrap();

        assert_eq!(read_text(&path).unwrap().as_deref(), Some("[]"));
        assert!(!temp_dir.path().join(".jobs.json.tmp").exists());
    }

    #[test]
    fn test_lock_file_is_kept_between_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jobs.json");
        let lock_path = temp_dir.path().join("jobs.lock");

        write_text(&path, "[]").unwrap();
        assert!(lock_path.exists());

        write_text(&path, "[1]").unwrap();
        assert!(lock_path.exists());
        assert_eq!(read_text(&path).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_remove_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user.json");
        remove(&path).unwrap();

        write_text(&path, "null").unwrap();
        remove(&path).unwrap();
        assert!(read_text(&path).unwrap().is_none());
    }
}
