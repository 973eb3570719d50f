//! Storage layer: atomic file operations and the file-backed key-value store.

mod atomic_file;
mod file_backend;

pub use atomic_file::{AtomicFileError, AtomicTomlFile, read_text, remove, write_text};
pub use file_backend::FileBackend;
