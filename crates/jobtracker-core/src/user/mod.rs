//! User domain module.
//!
//! - `model`: the `User` profile
//! - `session`: `Session`, the persisted login lifecycle

mod model;
mod session;

// Re-export public API
pub use model::User;
pub use session::Session;
