//! Resource repository implementation.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::ResourceId;
use campus_entity::lending::LoanState;
use campus_entity::resource::{CreateResource, Resource, ResourceListing};

use crate::store::ResourceStore;

/// Repository for the resource catalog.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load a resource and lock its row until the enclosing transaction ends.
    pub(crate) async fn lock(conn: &mut PgConnection, id: ResourceId) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock resource", e))
    }

    /// Write the status and borrower columns from a loan state.
    pub(crate) async fn set_loan_state(
        conn: &mut PgConnection,
        id: ResourceId,
        state: LoanState,
    ) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "UPDATE resources SET status = $2, borrower_id = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(state.status())
        .bind(state.borrower())
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update resource loan state", e)
        })
    }
}

#[async_trait]
impl ResourceStore for ResourceRepository {
    async fn find_by_id(&self, id: ResourceId) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find resource by id", e)
            })
    }

    async fn find_by_stored_file(&self, stored_file: &str) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE stored_file = $1")
            .bind(stored_file)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find resource by file", e)
            })
    }

    async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "INSERT INTO resources \
             (name, category, description, stored_file, original_filename, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.category)
        .bind(&data.description)
        .bind(&data.stored_file)
        .bind(&data.original_filename)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create resource", e))
    }

    async fn list_all(&self) -> AppResult<Vec<ResourceListing>> {
        sqlx::query_as::<_, ResourceListing>(
            "SELECT r.*, o.name AS owner_name, b.name AS borrower_name, \
                    (SELECT COUNT(*) FROM notifications n \
                     WHERE n.resource_id = r.id AND n.status = 'pending') AS pending_requests \
             FROM resources r \
             JOIN users o ON o.id = r.owner_id \
             LEFT JOIN users b ON b.id = r.borrower_id \
             ORDER BY r.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resources", e))
    }
}
