//! # campus-storage
//!
//! File storage for uploaded resources: a local filesystem
//! [`StorageProvider`](campus_core::traits::StorageProvider) and the
//! [`BlobStore`] that enforces the upload rules and generates unique
//! stored names.

pub mod blob;
pub mod providers;

pub use blob::{BlobStore, StoredBlob};
pub use providers::LocalStorageProvider;
