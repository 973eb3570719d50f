pub mod error;
pub mod config;
pub mod storage;
pub mod job;
pub mod user;
pub mod preferences;
pub mod workflow;
pub mod export;
pub mod ticker;

// Re-export common error type
pub use error::JobTrackerError;

pub use workflow::Dashboard;
