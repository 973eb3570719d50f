//! Timer-driven presentation state: the live clock and rotating quotations.
//!
//! # Module Structure
//!
//! - `clock`: locale-aware date and time rendering
//! - `quotes`: built-in motivational quotations per language
//! - `scheduler`: `Ticker`, advanced by the caller's timer
//!
//! Nothing here is persisted.

mod clock;
mod quotes;
mod scheduler;

// Re-export public API
pub use clock::{ClockFace, format_clock};
pub use quotes::{Quote, QuoteBook};
pub use scheduler::{Tick, Ticker};
