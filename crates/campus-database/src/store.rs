//! Store traits the service layer depends on.
//!
//! Each trait has a PostgreSQL implementation in [`crate::repositories`]
//! and an in-memory implementation in [`crate::memory`].

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;

use campus_core::config::ApprovalPolicy;
use campus_core::result::AppResult;
use campus_core::types::{NotificationId, ResourceId, UserId};
use campus_entity::lending::RequestDecision;
use campus_entity::notification::{
    CreateNotification, Notification, NotificationStatus, NotificationView,
};
use campus_entity::resource::{BorrowedItem, CreateResource, OwnedItem, Resource, ResourceListing};
use campus_entity::user::{CreateUser, User};

use crate::memory::MemoryStore;
use crate::repositories::{
    DashboardRepository, LendingRepository, NotificationRepository, ResourceRepository,
    UserRepository,
};

/// Identity store: user records keyed by id and by email.
#[async_trait]
pub trait UserStore: Send + Sync + Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by normalized email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a user. A duplicate email is a `Conflict`.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// Resource catalog.
#[async_trait]
pub trait ResourceStore: Send + Sync + Debug + 'static {
    /// Find a resource by primary key.
    async fn find_by_id(&self, id: ResourceId) -> AppResult<Option<Resource>>;

    /// Find the resource whose blob reference is `stored_file`.
    async fn find_by_stored_file(&self, stored_file: &str) -> AppResult<Option<Resource>>;

    /// Insert a new, available resource.
    async fn create(&self, data: &CreateResource) -> AppResult<Resource>;

    /// All resources with owner and borrower names, newest first.
    async fn list_all(&self) -> AppResult<Vec<ResourceListing>>;
}

/// Append-only ledger of borrow requests.
#[async_trait]
pub trait NotificationLedger: Send + Sync + Debug + 'static {
    /// Append a pending request timestamped now.
    async fn append(&self, data: &CreateNotification) -> AppResult<Notification>;

    /// Find a notification by primary key.
    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>>;

    /// An owner's inbox, newest first.
    async fn list_for_owner(&self, owner_id: UserId) -> AppResult<Vec<NotificationView>>;

    /// Number of pending requests addressed to `owner_id`.
    async fn pending_count_for_owner(&self, owner_id: UserId) -> AppResult<i64>;

    /// Pending requests for one resource, oldest first.
    async fn pending_for_resource(&self, resource_id: ResourceId) -> AppResult<Vec<Notification>>;

    /// Number of pending requests for one resource.
    async fn pending_count_for_resource(&self, resource_id: ResourceId) -> AppResult<i64>;

    /// Overwrite the status of a notification. Returns `false` if no row
    /// matched. This does not check the current status.
    async fn mark_resolved(&self, id: NotificationId, status: NotificationStatus)
    -> AppResult<bool>;
}

/// Atomic resolution of borrow requests.
#[async_trait]
pub trait LendingStore: Send + Sync + Debug + 'static {
    /// Resolve a pending notification. The notification update and the
    /// resource update are committed together or not at all.
    async fn resolve(
        &self,
        id: NotificationId,
        decision: RequestDecision,
        policy: ApprovalPolicy,
    ) -> AppResult<ResolvedRequest>;
}

/// Read projections for a user's dashboard.
#[async_trait]
pub trait DashboardStore: Send + Sync + Debug + 'static {
    /// Resources owned by `user_id`, with borrower names.
    async fn owned_view(&self, user_id: UserId) -> AppResult<Vec<OwnedItem>>;

    /// Resources borrowed by `user_id`, with owner names.
    async fn borrowed_view(&self, user_id: UserId) -> AppResult<Vec<BorrowedItem>>;
}

/// Rows written by a successful resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRequest {
    /// The notification after the update.
    pub notification: Notification,
    /// The resource after the update.
    pub resource: Resource,
    /// Borrower replaced by the approval, if any.
    pub displaced_borrower: Option<UserId>,
}

/// One handle per store trait, shared by the services.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Identity store.
    pub users: Arc<dyn UserStore>,
    /// Resource catalog.
    pub resources: Arc<dyn ResourceStore>,
    /// Notification ledger.
    pub notifications: Arc<dyn NotificationLedger>,
    /// Lending transactions.
    pub lending: Arc<dyn LendingStore>,
    /// Dashboard projections.
    pub dashboard: Arc<dyn DashboardStore>,
}

impl Stores {
    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            resources: Arc::new(ResourceRepository::new(pool.clone())),
            notifications: Arc::new(NotificationRepository::new(pool.clone())),
            lending: Arc::new(LendingRepository::new(pool.clone())),
            dashboard: Arc::new(DashboardRepository::new(pool)),
        }
    }

    /// Every trait served by the same in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            resources: store.clone(),
            notifications: store.clone(),
            lending: store.clone(),
            dashboard: store,
        }
    }
}
