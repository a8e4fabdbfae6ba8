//! Resource listing, upload, and file retrieval.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use campus_core::error::AppError;
use campus_core::traits::storage::{ByteStream, StorageObjectMeta};
use campus_core::types::{ResourceId, UserId};
use campus_database::store::{ResourceStore, UserStore};
use campus_entity::resource::{CreateResource, Resource, ResourceListing};
use campus_storage::BlobStore;

/// Handles the resource catalog use cases.
#[derive(Debug, Clone)]
pub struct ResourceService {
    /// Resource catalog.
    resources: Arc<dyn ResourceStore>,
    /// Identity store, for owner checks.
    users: Arc<dyn UserStore>,
    /// Upload blob store.
    blobs: Arc<BlobStore>,
}

/// A resource submission with its uploaded file.
#[derive(Debug, Clone)]
pub struct NewResource {
    /// Resource title.
    pub name: String,
    /// Category.
    pub category: String,
    /// Description.
    pub description: String,
    /// Listing user.
    pub owner_id: UserId,
    /// File name as uploaded.
    pub original_filename: String,
    /// File contents.
    pub data: Bytes,
}

/// An opened file ready to be streamed to a client.
pub struct Download {
    /// File contents.
    pub stream: ByteStream,
    /// Size and MIME type.
    pub meta: StorageObjectMeta,
    /// Name to suggest to the client.
    pub filename: String,
}

impl std::fmt::Debug for Download {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Download")
            .field("meta", &self.meta)
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}

impl ResourceService {
    /// Creates a new resource service.
    pub fn new(
        resources: Arc<dyn ResourceStore>,
        users: Arc<dyn UserStore>,
        blobs: Arc<BlobStore>,
    ) -> Self {
        Self {
            resources,
            users,
            blobs,
        }
    }

    /// All resources with owner and borrower names, newest first.
    pub async fn list(&self) -> Result<Vec<ResourceListing>, AppError> {
        self.resources.list_all().await
    }

    /// Loads a resource by id.
    pub async fn get(&self, id: ResourceId) -> Result<Resource, AppError> {
        self.resources
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Resource {id} not found")))
    }

    /// Stores the file and lists the resource as available.
    ///
    /// The blob is removed again if the catalog insert fails.
    pub async fn create(&self, req: NewResource) -> Result<Resource, AppError> {
        let name = req.name.trim();
        let category = req.category.trim();
        let description = req.description.trim();
        if name.is_empty() || category.is_empty() || description.is_empty() {
            return Err(AppError::validation("Missing required fields"));
        }
        if req.original_filename.trim().is_empty() {
            return Err(AppError::validation("No selected file"));
        }
        self.blobs.allowed_extension(&req.original_filename)?;

        if self.users.find_by_id(req.owner_id).await?.is_none() {
            return Err(AppError::not_found(format!("Owner {} not found", req.owner_id)));
        }

        let blob = self.blobs.store(&req.original_filename, req.data).await?;

        let created = self
            .resources
            .create(&CreateResource {
                name: name.to_string(),
                category: category.to_string(),
                description: description.to_string(),
                stored_file: blob.reference.clone(),
                original_filename: req.original_filename.clone(),
                owner_id: req.owner_id,
            })
            .await;

        match created {
            Ok(resource) => {
                info!(
                    resource_id = %resource.id,
                    user_id = %resource.owner_id,
                    stored_file = %resource.stored_file,
                    "Resource shared"
                );
                Ok(resource)
            }
            Err(e) => {
                warn!(reference = %blob.reference, error = %e, "Resource insert failed, removing upload");
                self.blobs.discard(&blob.reference).await;
                Err(e)
            }
        }
    }

    /// Opens a stored file by its reference, as served under `/uploads`.
    pub async fn open_upload(&self, reference: &str) -> Result<Download, AppError> {
        let (stream, meta) = self.blobs.open(reference).await?;
        Ok(Download {
            stream,
            meta,
            filename: reference.to_string(),
        })
    }

    /// Opens a stored file for download under its original name when known.
    pub async fn download(&self, reference: &str) -> Result<Download, AppError> {
        let mut download = self.open_upload(reference).await?;
        if let Some(resource) = self.resources.find_by_stored_file(reference).await? {
            download.filename = resource.original_filename;
        }
        Ok(download)
    }
}
