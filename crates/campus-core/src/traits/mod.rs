//! Core traits defined in `campus-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
