//! Owner inbox queries.

use std::sync::Arc;

use campus_core::error::AppError;
use campus_core::types::{ResourceId, UserId};
use campus_database::store::NotificationLedger;
use campus_entity::notification::{Notification, NotificationView};

/// Read access to the notification ledger.
#[derive(Debug, Clone)]
pub struct NotificationService {
    ledger: Arc<dyn NotificationLedger>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(ledger: Arc<dyn NotificationLedger>) -> Self {
        Self { ledger }
    }

    /// An owner's inbox, newest first. Unknown owners have an empty inbox.
    pub async fn list_for_owner(&self, owner_id: UserId) -> Result<Vec<NotificationView>, AppError> {
        self.ledger.list_for_owner(owner_id).await
    }

    /// Number of requests awaiting the owner's decision.
    pub async fn pending_count_for_owner(&self, owner_id: UserId) -> Result<i64, AppError> {
        self.ledger.pending_count_for_owner(owner_id).await
    }

    /// Requests still pending for a resource.
    pub async fn pending_for_resource(
        &self,
        resource_id: ResourceId,
    ) -> Result<Vec<Notification>, AppError> {
        self.ledger.pending_for_resource(resource_id).await
    }

    /// Whether a resource has any pending request.
    pub async fn has_pending(&self, resource_id: ResourceId) -> Result<bool, AppError> {
        Ok(self.ledger.pending_count_for_resource(resource_id).await? > 0)
    }
}
