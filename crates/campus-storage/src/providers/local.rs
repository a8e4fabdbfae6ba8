//! Local filesystem storage provider.
//!
//! Uploads are stored flat in one directory, so every path handed to this
//! provider must be a single file name.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::traits::storage::{ByteStream, StorageObjectMeta, StorageProvider};

/// Local filesystem storage provider.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Directory holding all stored files.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a file name to its absolute path within the root.
    fn resolve(&self, name: &str) -> AppResult<PathBuf> {
        validate_file_name(name)?;
        Ok(self.root.join(name))
    }
}

/// Reject anything that is not a single plain path component.
pub fn validate_file_name(name: &str) -> AppResult<()> {
    if name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name.contains('\0')
    {
        return Err(AppError::validation(format!("Invalid file name: '{name}'")));
    }
    Ok(())
}

fn not_found_or_storage(e: std::io::Error, action: &str, name: &str) -> AppError {
    if e.kind() == std::io::ErrorKind::NotFound {
        AppError::not_found(format!("File not found: {name}"))
    } else {
        AppError::with_source(ErrorKind::Storage, format!("Failed to {action} file: {name}"), e)
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.is_dir())
    }

    async fn read(&self, path: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(path)?;
        let file = fs::File::open(&full_path)
            .await
            .map_err(|e| not_found_or_storage(e, "open", path))?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream.map(|r| r.map(Bytes::from))))
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path)?;
        let data = fs::read(&full_path)
            .await
            .map_err(|e| not_found_or_storage(e, "read", path))?;
        Ok(Bytes::from(data))
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write file: {path}"), e)
        })?;

        debug!(path, bytes = data.len(), "Wrote file");
        Ok(())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete file: {path}"),
                e,
            )),
        }
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let full_path = self.resolve(path)?;
        Ok(full_path.is_file())
    }

    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta> {
        let full_path = self.resolve(path)?;
        let meta = fs::metadata(&full_path)
            .await
            .map_err(|e| not_found_or_storage(e, "stat", path))?;
        if !meta.is_file() {
            return Err(AppError::not_found(format!("File not found: {path}")));
        }

        Ok(StorageObjectMeta {
            path: path.to_string(),
            size_bytes: meta.len(),
            mime_type: mime_from_path(path),
        })
    }
}

/// Guess MIME type from a file name extension.
pub fn mime_from_path(path: &str) -> Option<String> {
    let (_, ext) = path.rsplit_once('.')?;
    let mime = match ext.to_lowercase().as_str() {
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        _ => return None,
    };
    Some(mime.to_string())
}
