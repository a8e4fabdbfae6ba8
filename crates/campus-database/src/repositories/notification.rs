//! Notification ledger repository implementation.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::{NotificationId, ResourceId, UserId};
use campus_entity::notification::{
    CreateNotification, Notification, NotificationStatus, NotificationView,
};

use crate::store::NotificationLedger;

/// Repository for borrow-request notifications.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load a notification and lock its row until the enclosing transaction ends.
    pub(crate) async fn lock(
        conn: &mut PgConnection,
        id: NotificationId,
    ) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to lock notification", e)
            })
    }

    /// Overwrite the status column.
    pub(crate) async fn update_status(
        conn: &mut PgConnection,
        id: NotificationId,
        status: NotificationStatus,
    ) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update notification status", e)
        })
    }
}

#[async_trait]
impl NotificationLedger for NotificationRepository {
    async fn append(&self, data: &CreateNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (owner_id, requester_id, resource_id) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.requester_id)
        .bind(data.resource_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    async fn list_for_owner(&self, owner_id: UserId) -> AppResult<Vec<NotificationView>> {
        sqlx::query_as::<_, NotificationView>(
            "SELECT n.id, n.status, n.created_at, n.resource_id, r.name AS resource_name, \
                    n.requester_id, u.name AS requester_name \
             FROM notifications n \
             JOIN resources r ON r.id = n.resource_id \
             JOIN users u ON u.id = n.requester_id \
             WHERE n.owner_id = $1 \
             ORDER BY n.created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    async fn pending_count_for_owner(&self, owner_id: UserId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE owner_id = $1 AND status = 'pending'",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count pending notifications", e)
        })
    }

    async fn pending_for_resource(&self, resource_id: ResourceId) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE resource_id = $1 AND status = 'pending' \
             ORDER BY created_at ASC",
        )
        .bind(resource_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pending requests", e)
        })
    }

    async fn pending_count_for_resource(&self, resource_id: ResourceId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE resource_id = $1 AND status = 'pending'",
        )
        .bind(resource_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count pending requests", e)
        })
    }

    async fn mark_resolved(
        &self,
        id: NotificationId,
        status: NotificationStatus,
    ) -> AppResult<bool> {
        let mut conn = self.pool.acquire().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to acquire connection", e)
        })?;
        Ok(Self::update_status(&mut conn, id, status).await?.is_some())
    }
}
