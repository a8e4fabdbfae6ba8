//! Notification entity model.

use campus_core::types::{NotificationId, ResourceId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::NotificationStatus;

/// One borrow request in an owner's inbox. Never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Owner of the resource at the time of the request.
    pub owner_id: UserId,
    /// The user asking to borrow.
    pub requester_id: UserId,
    /// The requested resource.
    pub resource_id: ResourceId,
    /// Current status.
    pub status: NotificationStatus,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification still awaits a decision.
    pub fn is_pending(&self) -> bool {
        self.status == NotificationStatus::Pending
    }
}

/// Data required to append a request to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// Current owner of the resource.
    pub owner_id: UserId,
    /// The user asking to borrow.
    pub requester_id: UserId,
    /// The requested resource.
    pub resource_id: ResourceId,
}
