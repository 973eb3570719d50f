//! Job application domain module.
//!
//! # Module Structure
//!
//! - `model`: `JobApplication`, the form payload `JobDraft`, and the status,
//!   work-location, and employment-type enums
//! - `store`: `JobStore`, the persisted record collection
//! - `view`: pure derived views (partition, search, display order, summary)
//!
//! # Usage
//!
//! ```ignore
//! use jobtracker_core::job::{JobApplication, JobDraft, JobStore, Status};
//! use jobtracker_core::job::view;
//! ```

mod model;
mod store;
pub mod view;

// Re-export public API
pub use model::{EmploymentType, JobApplication, JobDraft, Status, WorkLocation};
pub use store::JobStore;
pub use view::StatusSummary;
