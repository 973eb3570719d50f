//! Flat-file export of the record collection.

mod csv;

pub use csv::{CSV_HEADER, EXPORT_FILE_NAME, escape_field, to_csv};
