pub mod appearance;
pub mod config_service;
pub mod logging;
pub mod paths;
pub mod storage;
pub mod wallpaper;

pub use crate::appearance::TerminalAppearance;
pub use crate::config_service::ConfigService;
pub use crate::paths::JobTrackerPaths;
pub use crate::storage::FileBackend;
