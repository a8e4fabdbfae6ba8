//! Storage provider trait for pluggable file storage backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading file contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Metadata about a stored object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Path within the storage provider.
    pub path: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type (if known).
    pub mime_type: Option<String>,
}

/// Trait for file storage backends.
///
/// The [`StorageProvider`] trait is defined here in `campus-core` and
/// implemented in `campus-storage`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a file and return its byte stream.
    async fn read(&self, path: &str) -> AppResult<ByteStream>;

    /// Read a file into memory as a complete byte vector.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Write bytes to a file at the given path.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete a file at the given path.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Get metadata about a file.
    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta>;
}
