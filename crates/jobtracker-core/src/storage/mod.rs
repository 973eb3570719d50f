//! Persistent key-value storage.
//!
//! # Module Structure
//!
//! - `backend`: the raw string-valued backend contract and an in-memory backend
//! - `store`: typed JSON get/set with default-on-failure semantics
//! - `keys`: the durable key names
//!
//! Every key is written independently. Nothing in the job tracker needs two
//! keys to change atomically together.

mod backend;
pub mod keys;
mod store;

pub use backend::{KeyValueBackend, MemoryBackend};
pub use store::PersistentStore;
