//! Explicit loan state of a resource.

use campus_core::types::{ResourceId, UserId};
use campus_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::resource::ResourceStatus;

/// Who holds a resource right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoanState {
    /// Initial state. Nobody holds the resource.
    Available,
    /// The resource is lent to `borrower`.
    OnLoan {
        /// The current borrower.
        borrower: UserId,
    },
}

impl LoanState {
    /// Decode from the persisted columns.
    ///
    /// A borrower is present if and only if the status is on loan; any
    /// other combination is a corrupted row.
    pub fn from_columns(
        resource_id: ResourceId,
        status: ResourceStatus,
        borrower_id: Option<UserId>,
    ) -> AppResult<Self> {
        match (status, borrower_id) {
            (ResourceStatus::Available, None) => Ok(Self::Available),
            (ResourceStatus::OnLoan, Some(borrower)) => Ok(Self::OnLoan { borrower }),
            (status, borrower) => Err(AppError::internal(format!(
                "Resource {resource_id} has status '{status}' with borrower {borrower:?}"
            ))),
        }
    }

    /// The persisted status for this state.
    pub fn status(&self) -> ResourceStatus {
        match self {
            Self::Available => ResourceStatus::Available,
            Self::OnLoan { .. } => ResourceStatus::OnLoan,
        }
    }

    /// The persisted borrower column for this state.
    pub fn borrower(&self) -> Option<UserId> {
        match self {
            Self::Available => None,
            Self::OnLoan { borrower } => Some(*borrower),
        }
    }

    /// Check whether the resource can be requested.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}
