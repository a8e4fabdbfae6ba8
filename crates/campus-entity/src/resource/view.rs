//! Read-side projections joining resources with user names.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::model::Resource;

/// A catalog entry: the resource plus owner and borrower names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResourceListing {
    /// The resource row.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub resource: Resource,
    /// Name of the owner.
    pub owner_name: String,
    /// Name of the borrower, if on loan.
    pub borrower_name: Option<String>,
    /// Number of unresolved borrow requests for this resource.
    pub pending_requests: i64,
}

/// A resource shown in its owner's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OwnedItem {
    /// The resource row.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub resource: Resource,
    /// Name of the borrower, if on loan.
    pub borrower_name: Option<String>,
}

/// A resource shown in its borrower's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BorrowedItem {
    /// The resource row.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub resource: Resource,
    /// Name of the owner.
    pub owner_name: String,
}
