//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use campus_auth::password::{PasswordHasher, PasswordValidator};
use campus_core::config::AppConfig;
use campus_database::{DatabasePool, Stores};
use campus_service::{
    DashboardService, LendingService, NotificationService, ResourceService, UserService,
};
use campus_storage::BlobStore;

/// Shared application state available to all handlers via Axum's `State`
/// extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Registration and login.
    pub user_service: Arc<UserService>,
    /// Resource catalog and uploads.
    pub resource_service: Arc<ResourceService>,
    /// Borrow requests.
    pub lending_service: Arc<LendingService>,
    /// Owner inbox.
    pub notification_service: Arc<NotificationService>,
    /// Dashboard projections.
    pub dashboard_service: Arc<DashboardService>,
    /// Upload storage, for health checks.
    pub blobs: Arc<BlobStore>,
    /// PostgreSQL pool, for health checks. `None` over the in-memory store.
    pub database: Option<DatabasePool>,
    /// When the state was built.
    pub started_at: Instant,
}

impl AppState {
    /// Wires every service over one set of stores.
    pub fn new(config: AppConfig, stores: Stores, blobs: Arc<BlobStore>) -> Self {
        let user_service = UserService::new(
            stores.users.clone(),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config.auth)),
        );
        let resource_service =
            ResourceService::new(stores.resources.clone(), stores.users.clone(), blobs.clone());
        let lending_service = LendingService::new(
            stores.resources.clone(),
            stores.users.clone(),
            stores.notifications.clone(),
            stores.lending.clone(),
            config.lending.approval_policy,
        );
        let notification_service = NotificationService::new(stores.notifications.clone());
        let dashboard_service = DashboardService::new(stores.dashboard);

        Self {
            config: Arc::new(config),
            user_service: Arc::new(user_service),
            resource_service: Arc::new(resource_service),
            lending_service: Arc::new(lending_service),
            notification_service: Arc::new(notification_service),
            dashboard_service: Arc::new(dashboard_service),
            blobs,
            database: None,
            started_at: Instant::now(),
        }
    }

    /// Attaches the pool backing the stores so health checks can reach it.
    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}
