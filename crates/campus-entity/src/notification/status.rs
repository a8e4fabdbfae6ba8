//! Notification status enumeration.

use campus_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::lending::RequestDecision;

/// Lifecycle of a borrow request. `Pending` moves exactly once to a
/// terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Awaiting the owner's decision.
    Pending,
    /// The owner lent the resource.
    Approved,
    /// The owner refused.
    Denied,
}

impl NotificationStatus {
    /// Check whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Apply an owner decision. Only pending notifications can be resolved.
    pub fn resolve(self, decision: RequestDecision) -> AppResult<Self> {
        match self {
            Self::Pending => Ok(decision.into()),
            _ => Err(AppError::not_found("No pending notification found")),
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }
}

impl From<RequestDecision> for NotificationStatus {
    fn from(decision: RequestDecision) -> Self {
        match decision {
            RequestDecision::Approved => Self::Approved,
            RequestDecision::Denied => Self::Denied,
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            _ => Err(AppError::validation(format!(
                "Invalid notification status: '{s}'. Expected one of: pending, approved, denied"
            ))),
        }
    }
}
