//! Inbox projection of a notification.

use campus_core::types::{NotificationId, ResourceId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::NotificationStatus;

/// A notification enriched with the resource and requester names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationView {
    /// Notification identifier.
    pub id: NotificationId,
    /// Current status.
    pub status: NotificationStatus,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
    /// The requested resource.
    pub resource_id: ResourceId,
    /// Name of the requested resource.
    pub resource_name: String,
    /// The requesting user.
    pub requester_id: UserId,
    /// Name of the requesting user.
    pub requester_name: String,
}
