//! View composition: modal state machines and the dashboard that drives them.
//!
//! - `modal`: `Modal`, `FormModal`, and the staged `ConfirmationGate`
//! - `dashboard`: `Dashboard`, the injected application object

mod dashboard;
mod modal;

// Re-export public API
pub use dashboard::Dashboard;
pub use modal::{ConfirmationGate, FormModal, Modal};
