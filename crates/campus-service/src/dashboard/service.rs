//! Dashboard aggregation.

use std::sync::Arc;

use serde::Serialize;

use campus_core::error::AppError;
use campus_core::types::UserId;
use campus_database::store::DashboardStore;
use campus_entity::resource::{BorrowedItem, OwnedItem};

/// Everything a user lends out and everything they hold.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Resources the user owns, with borrower names.
    pub owned_items: Vec<OwnedItem>,
    /// Resources the user has borrowed, with owner names.
    pub borrowed_items: Vec<BorrowedItem>,
}

/// Read-only dashboard projections.
#[derive(Debug, Clone)]
pub struct DashboardService {
    dashboard: Arc<dyn DashboardStore>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(dashboard: Arc<dyn DashboardStore>) -> Self {
        Self { dashboard }
    }

    /// Both views for one user. A user with nothing gets empty lists.
    pub async fn for_user(&self, user_id: UserId) -> Result<Dashboard, AppError> {
        let (owned_items, borrowed_items) = tokio::try_join!(
            self.dashboard.owned_view(user_id),
            self.dashboard.borrowed_view(user_id),
        )?;
        Ok(Dashboard {
            owned_items,
            borrowed_items,
        })
    }
}
