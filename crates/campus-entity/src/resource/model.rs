//! Resource entity model.

use campus_core::AppResult;
use campus_core::types::{ResourceId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::ResourceStatus;
use crate::lending::LoanState;

/// A shareable item listed by its owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: ResourceId,
    /// Resource title.
    pub name: String,
    /// Free-form category (e.g. "Notes", "Textbook").
    pub category: String,
    /// Free-form description.
    pub description: String,
    /// Opaque reference returned by the blob store.
    pub stored_file: String,
    /// File name as uploaded by the owner.
    pub original_filename: String,
    /// The listing user.
    pub owner_id: UserId,
    /// Persisted loan status.
    pub status: ResourceStatus,
    /// Current borrower. Set exactly when `status` is on loan.
    pub borrower_id: Option<UserId>,
    /// When the resource was listed.
    pub created_at: DateTime<Utc>,
}

impl Resource {
    /// Decode the explicit loan state from the `(status, borrower_id)` columns.
    pub fn loan_state(&self) -> AppResult<LoanState> {
        LoanState::from_columns(self.id, self.status, self.borrower_id)
    }

    /// Overwrite the status columns with the given loan state.
    pub fn apply_loan_state(&mut self, state: LoanState) {
        self.status = state.status();
        self.borrower_id = state.borrower();
    }

    /// Check whether `user_id` owns this resource.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Data required to list a new resource. New resources are always available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResource {
    /// Resource title.
    pub name: String,
    /// Category.
    pub category: String,
    /// Description.
    pub description: String,
    /// Blob store reference.
    pub stored_file: String,
    /// Uploaded file name.
    pub original_filename: String,
    /// The listing user.
    pub owner_id: UserId,
}
