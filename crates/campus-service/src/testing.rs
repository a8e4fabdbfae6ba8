//! Service fixtures over the in-memory store.

use std::sync::Arc;

use bytes::Bytes;
use tempfile::TempDir;

use campus_auth::password::{PasswordHasher, PasswordValidator};
use campus_core::config::{ApprovalPolicy, AuthConfig, StorageConfig};
use campus_core::types::UserId;
use campus_database::{MemoryStore, Stores};
use campus_entity::user::UserSummary;
use campus_storage::{BlobStore, LocalStorageProvider};

use crate::{
    DashboardService, LendingService, NewResource, NotificationService, RegisterUser,
    ResourceService, UserService,
};

pub(crate) struct TestServices {
    pub users: UserService,
    pub resources: ResourceService,
    pub lending: LendingService,
    pub notifications: NotificationService,
    pub dashboard: DashboardService,
    upload_dir: TempDir,
}

impl TestServices {
    pub async fn new() -> Self {
        Self::with_policy(ApprovalPolicy::LastWriterWins).await
    }

    pub async fn with_policy(policy: ApprovalPolicy) -> Self {
        let upload_dir = tempfile::tempdir().unwrap();
        let storage_config = StorageConfig {
            upload_dir: upload_dir.path().display().to_string(),
            ..StorageConfig::default()
        };
        let provider = LocalStorageProvider::new(&storage_config.upload_dir)
            .await
            .unwrap();
        let blobs = Arc::new(BlobStore::new(Arc::new(provider), &storage_config));
        let stores = Stores::memory(MemoryStore::new());

        Self {
            users: UserService::new(
                stores.users.clone(),
                Arc::new(PasswordHasher::new()),
                Arc::new(PasswordValidator::new(&AuthConfig::default())),
            ),
            resources: ResourceService::new(stores.resources.clone(), stores.users.clone(), blobs),
            lending: LendingService::new(
                stores.resources.clone(),
                stores.users.clone(),
                stores.notifications.clone(),
                stores.lending.clone(),
                policy,
            ),
            notifications: NotificationService::new(stores.notifications.clone()),
            dashboard: DashboardService::new(stores.dashboard.clone()),
            upload_dir,
        }
    }

    pub async fn register(&self, name: &str) -> UserSummary {
        self.users
            .register(RegisterUser {
                name: name.to_string(),
                email: format!("{}@x.edu", name.to_lowercase()),
                password: "password123".to_string(),
            })
            .await
            .unwrap()
    }

    pub fn upload_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path()).unwrap().count()
    }
}

pub(crate) fn pdf(owner_id: UserId, name: &str) -> NewResource {
    NewResource {
        name: name.to_string(),
        category: "Notes".to_string(),
        description: "Lecture notes".to_string(),
        owner_id,
        original_filename: "notes.pdf".to_string(),
        data: Bytes::from_static(b"%PDF-1.4 test"),
    }
}
