//! Upload blob store.
//!
//! Accepts uploaded bytes, enforces the extension allow-list and size limit,
//! and stores them under a generated `<uuid>.<ext>` name. Callers only ever
//! see that opaque reference.

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use campus_core::config::StorageConfig;
use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::traits::storage::{ByteStream, StorageObjectMeta, StorageProvider};

use crate::providers::validate_file_name;

/// A blob written by [`BlobStore::store`].
#[derive(Debug, Clone, Serialize)]
pub struct StoredBlob {
    /// Generated unique name; the reference persisted with the resource.
    pub reference: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// Upload rules on top of a storage provider.
#[derive(Debug, Clone)]
pub struct BlobStore {
    provider: Arc<dyn StorageProvider>,
    allowed_extensions: Vec<String>,
    max_size_bytes: u64,
}

impl BlobStore {
    /// Create a blob store over `provider` using the configured rules.
    pub fn new(provider: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        Self {
            provider,
            allowed_extensions: config
                .allowed_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            max_size_bytes: config.max_upload_size_bytes,
        }
    }

    /// Maximum accepted upload size.
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// Check the allow-list and return the normalized extension.
    pub fn allowed_extension(&self, filename: &str) -> AppResult<String> {
        let ext = extension_of(filename)
            .ok_or_else(|| AppError::validation("File type not allowed"))?;
        if self.allowed_extensions.iter().any(|allowed| *allowed == ext) {
            Ok(ext)
        } else {
            Err(AppError::validation(format!(
                "File type '.{ext}' not allowed. Allowed: {}",
                self.allowed_extensions.join(", ")
            )))
        }
    }

    /// Validate and store an upload under a fresh unique name.
    pub async fn store(&self, original_filename: &str, data: Bytes) -> AppResult<StoredBlob> {
        let ext = self.allowed_extension(original_filename)?;
        let size_bytes = data.len() as u64;
        if size_bytes == 0 {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if size_bytes > self.max_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds the maximum upload size of {} bytes",
                self.max_size_bytes
            )));
        }

        let reference = format!("{}.{ext}", Uuid::new_v4());
        self.provider.write(&reference, data).await?;

        info!(reference = %reference, original_filename, size_bytes, "Stored upload");
        Ok(StoredBlob {
            reference,
            size_bytes,
        })
    }

    /// Open a stored blob for streaming.
    pub async fn open(&self, reference: &str) -> AppResult<(ByteStream, StorageObjectMeta)> {
        validate_file_name(reference)?;
        let meta = self.provider.metadata(reference).await?;
        let stream = self.provider.read(reference).await?;
        Ok((stream, meta))
    }

    /// Remove a stored blob. Failures are logged and swallowed.
    pub async fn discard(&self, reference: &str) {
        if let Err(e) = self.provider.delete(reference).await {
            warn!(reference, error = %e, "Failed to remove orphaned upload");
        }
    }

    /// Check whether the underlying provider is reachable.
    pub async fn health_check(&self) -> bool {
        self.provider.health_check().await.unwrap_or(false)
    }
}

/// Lowercase extension after the last `.`, if any.
pub fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
