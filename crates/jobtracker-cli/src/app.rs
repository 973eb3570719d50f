//! Process bootstrap: configuration, logging, storage, dashboard.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use jobtracker_core::Dashboard;
use jobtracker_core::config::RootConfig;
use jobtracker_core::preferences::AppearanceProbe;
use jobtracker_core::storage::{KeyValueBackend, MemoryBackend, PersistentStore};
use jobtracker_infrastructure::config_service::resolve_data_dir;
use jobtracker_infrastructure::logging::{self, WorkerGuard};
use jobtracker_infrastructure::{ConfigService, FileBackend, JobTrackerPaths, TerminalAppearance};

pub struct App {
    pub dashboard: Dashboard,
    pub config: RootConfig,
}

impl App {
    pub fn new(
        config: RootConfig,
        store: PersistentStore,
        appearance: Arc<dyn AppearanceProbe>,
    ) -> Self {
        Self {
            dashboard: Dashboard::new(store, appearance),
            config,
        }
    }

    /// Loads configuration, installs logging, and opens the data directory.
    ///
    /// An explicit `--config` must load cleanly; the default location falls
    /// back to built-in defaults. When the data directory cannot be opened the
    /// session runs against memory only and nothing is saved.
    pub fn bootstrap(
        config_path: Option<&Path>,
        data_dir: Option<PathBuf>,
    ) -> Result<(Self, Option<WorkerGuard>)> {
        let mut config = match config_path {
            Some(path) => ConfigService::new(path)
                .load()
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => ConfigService::at_default_location()
                .map(|service| service.load_or_default())
                .unwrap_or_default(),
        };
        if data_dir.is_some() {
            config.storage.data_dir = data_dir;
        }

        let logs_dir = JobTrackerPaths::logs_dir().ok();
        let guard = logging::init(&config.logging, logs_dir.as_deref())
            .context("Failed to initialise logging")?;

        let backend = open_backend(&config);
        let store = PersistentStore::new(backend);
        Ok((Self::new(config, store, Arc::new(TerminalAppearance)), guard))
    }
}

fn open_backend(config: &RootConfig) -> Arc<dyn KeyValueBackend> {
    let opened = resolve_data_dir(config).and_then(|dir| FileBackend::open(dir));
    match opened {
        Ok(backend) => {
            tracing::info!(dir = %backend.dir().display(), "Using file storage");
            Arc::new(backend)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Data directory unavailable, changes will not be saved");
            eprintln!("warning: {e}; changes will not be saved");
            Arc::new(MemoryBackend::new())
        }
    }
}

#[cfg(test)]
impl App {
    pub fn in_memory() -> Self {
        use jobtracker_core::preferences::{Appearance, FixedAppearance};

        Self::new(
            RootConfig::default(),
            PersistentStore::in_memory(),
            Arc::new(FixedAppearance(Appearance::Light)),
        )
    }

    /// In-memory app with a signed-in user.
    pub fn signed_in() -> Self {
        let mut app = Self::in_memory();
        app.dashboard
            .login("Febri", "febri@example.com")
            .expect("valid user");
        app
    }
}
