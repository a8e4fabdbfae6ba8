//! Dashboard projections.

use async_trait::async_trait;
use sqlx::PgPool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::UserId;
use campus_entity::resource::{BorrowedItem, OwnedItem};

use crate::store::DashboardStore;

/// Read-only queries for the user dashboard.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new dashboard repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    async fn owned_view(&self, user_id: UserId) -> AppResult<Vec<OwnedItem>> {
        sqlx::query_as::<_, OwnedItem>(
            "SELECT r.*, b.name AS borrower_name \
             FROM resources r \
             LEFT JOIN users b ON b.id = r.borrower_id \
             WHERE r.owner_id = $1 \
             ORDER BY r.created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load owned items", e))
    }

    async fn borrowed_view(&self, user_id: UserId) -> AppResult<Vec<BorrowedItem>> {
        sqlx::query_as::<_, BorrowedItem>(
            "SELECT r.*, o.name AS owner_name \
             FROM resources r \
             JOIN users o ON o.id = r.owner_id \
             WHERE r.borrower_id = $1 \
             ORDER BY r.created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load borrowed items", e)
        })
    }
}
