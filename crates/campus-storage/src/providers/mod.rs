//! Storage provider implementations.

pub mod local;

pub use local::{LocalStorageProvider, validate_file_name};
