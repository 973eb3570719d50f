//! Tracing subscriber setup.

use std::path::Path;

use jobtracker_core::config::LoggingSettings;
use jobtracker_core::error::{JobTrackerError, Result};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

pub use tracing_appender::non_blocking::WorkerGuard;

/// Base name of the daily rolling log file.
pub const LOG_FILE_PREFIX: &str = "jobtracker.log";

/// Installs the global subscriber.
///
/// The stderr layer honours `RUST_LOG` and defaults to `warn`, keeping
/// command output clean. When `settings.file` is set and `logs_dir` is
/// known, a daily rolling file filtered by `settings.level` is added. The
/// returned guard must be held for the life of the process so buffered
/// lines are flushed.
pub fn init(settings: &LoggingSettings, logs_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let (file_layer, guard) = match logs_dir.filter(|_| settings.file) {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_filter = EnvFilter::try_new(&settings.level).map_err(|e| {
                JobTrackerError::config(format!("Invalid log level '{}': {}", settings.level, e))
            })?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| JobTrackerError::internal(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_level_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings = LoggingSettings {
            level: "jobtracker=loud".to_string(),
            file: true,
        };
        let err = init(&settings, Some(temp_dir.path())).unwrap_err();
        assert!(matches!(err, JobTrackerError::Config(_)));
    }
}
