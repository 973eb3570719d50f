//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field has a default so a missing or partial file is always valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RootConfig {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    pub display: DisplaySettings,
}

/// Where the key-value documents live.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the platform data directory when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Write a daily rolling log file under the logs directory.
    pub file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    pub clock_tick_millis: u64,
    pub quote_interval_secs: u64,
}

impl DisplaySettings {
    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_millis.max(1))
    }

    pub fn quote_interval(&self) -> Duration {
        Duration::from_secs(self.quote_interval_secs)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            clock_tick_millis: 1000,
            quote_interval_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.display.quote_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/tmp/jobs"

            [display]
            quote_interval_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/jobs")));
        assert_eq!(config.display.quote_interval_secs, 5);
        assert_eq!(config.display.clock_tick_millis, 1000);
        assert!(config.logging.file);
    }
}
