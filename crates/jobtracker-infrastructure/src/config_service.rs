//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml`
//! (~/.config/jobtracker/config.toml by default).

use std::path::{Path, PathBuf};

use jobtracker_core::config::RootConfig;
use jobtracker_core::error::{JobTrackerError, Result};

use crate::paths::JobTrackerPaths;
use crate::storage::AtomicTomlFile;

/// Loads `RootConfig`, writing a default file on first run.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the platform config file location.
    pub fn at_default_location() -> Result<Self> {
        let path = JobTrackerPaths::config_file()
            .map_err(|e| JobTrackerError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, creating the file with defaults if missing.
    ///
    /// A malformed file is reported as an error rather than overwritten.
    pub fn load(&self) -> Result<RootConfig> {
        let file = AtomicTomlFile::<RootConfig>::new(self.path.clone());
        let config = file.load_or_create(RootConfig::default())?;
        tracing::debug!(path = %self.path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Like [`load`](Self::load), but falls back to defaults on any error.
    pub fn load_or_default(&self) -> RootConfig {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Using default configuration");
            RootConfig::default()
        })
    }
}

/// Directory holding the key-value documents.
///
/// `[storage] data_dir` wins over the platform data directory.
pub fn resolve_data_dir(config: &RootConfig) -> Result<PathBuf> {
    match &config.storage.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => JobTrackerPaths::data_dir().map_err(|e| JobTrackerError::config(e.to_string())),
    }
}
