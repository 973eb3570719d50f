//! Unified path management for job tracker files.
//!
//! Resolves the platform config and data directories through `dirs`, so
//! Linux, macOS, and Windows each get their conventional locations.

use std::path::PathBuf;

const APP_DIR: &str = "jobtracker";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform exposes no config directory.
    ConfigDirNotFound,
    /// The platform exposes no data directory.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for the job tracker.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/jobtracker/        # Config directory
/// ├── config.toml              # Application configuration
/// └── logs/                    # Application logs
///     └── jobtracker.log.YYYY-MM-DD
///
/// ~/.local/share/jobtracker/   # Data directory (key-value documents)
/// ├── jobs.json
/// ├── user.json
/// ├── theme.json
/// └── ...
/// ```
pub struct JobTrackerPaths;

impl JobTrackerPaths {
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Default home of the key-value documents.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
