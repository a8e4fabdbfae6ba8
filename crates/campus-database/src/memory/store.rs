//! In-memory implementation of every store trait.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use campus_core::config::ApprovalPolicy;
use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::{NotificationId, ResourceId, UserId};
use campus_entity::lending::{RequestDecision, plan_resolution};
use campus_entity::notification::{
    CreateNotification, Notification, NotificationStatus, NotificationView,
};
use campus_entity::resource::{
    BorrowedItem, CreateResource, OwnedItem, Resource, ResourceListing, ResourceStatus,
};
use campus_entity::user::{CreateUser, User};

use crate::store::{
    DashboardStore, LendingStore, NotificationLedger, ResolvedRequest, ResourceStore, UserStore,
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    resources: Vec<Resource>,
    notifications: Vec<Notification>,
}

impl Tables {
    fn user_name(&self, id: UserId) -> Option<String> {
        self.users.iter().find(|u| u.id == id).map(|u| u.name.clone())
    }

    fn pending_count(&self, resource_id: ResourceId) -> i64 {
        self.notifications
            .iter()
            .filter(|n| n.resource_id == resource_id && n.is_pending())
            .count() as i64
    }
}

/// Process-local store. Every operation holds one lock for its duration,
/// so multi-row writes are atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == data.email) {
            return Err(AppError::conflict("Email is already registered"));
        }
        let user = User {
            id: UserId::new(),
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn find_by_id(&self, id: ResourceId) -> AppResult<Option<Resource>> {
        let tables = self.tables.read().await;
        Ok(tables.resources.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_stored_file(&self, stored_file: &str) -> AppResult<Option<Resource>> {
        let tables = self.tables.read().await;
        Ok(tables
            .resources
            .iter()
            .find(|r| r.stored_file == stored_file)
            .cloned())
    }

    async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        let mut tables = self.tables.write().await;
        if tables.user_name(data.owner_id).is_none() {
            return Err(AppError::database(format!(
                "Owner {} does not exist",
                data.owner_id
            )));
        }
        let resource = Resource {
            id: ResourceId::new(),
            name: data.name.clone(),
            category: data.category.clone(),
            description: data.description.clone(),
            stored_file: data.stored_file.clone(),
            original_filename: data.original_filename.clone(),
            owner_id: data.owner_id,
            status: ResourceStatus::Available,
            borrower_id: None,
            created_at: Utc::now(),
        };
        tables.resources.push(resource.clone());
        Ok(resource)
    }

    async fn list_all(&self) -> AppResult<Vec<ResourceListing>> {
        let tables = self.tables.read().await;
        Ok(tables
            .resources
            .iter()
            .rev()
            .map(|r| ResourceListing {
                resource: r.clone(),
                owner_name: tables.user_name(r.owner_id).unwrap_or_default(),
                borrower_name: r.borrower_id.and_then(|id| tables.user_name(id)),
                pending_requests: tables.pending_count(r.id),
            })
            .collect())
    }
}

#[async_trait]
impl NotificationLedger for MemoryStore {
    async fn append(&self, data: &CreateNotification) -> AppResult<Notification> {
        let mut tables = self.tables.write().await;
        let notification = Notification {
            id: NotificationId::new(),
            owner_id: data.owner_id,
            requester_id: data.requester_id,
            resource_id: data.resource_id,
            status: NotificationStatus::Pending,
            created_at: Utc::now(),
        };
        tables.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        let tables = self.tables.read().await;
        Ok(tables.notifications.iter().find(|n| n.id == id).cloned())
    }

    async fn list_for_owner(&self, owner_id: UserId) -> AppResult<Vec<NotificationView>> {
        let tables = self.tables.read().await;
        Ok(tables
            .notifications
            .iter()
            .rev()
            .filter(|n| n.owner_id == owner_id)
            .filter_map(|n| {
                let resource = tables.resources.iter().find(|r| r.id == n.resource_id)?;
                Some(NotificationView {
                    id: n.id,
                    status: n.status,
                    created_at: n.created_at,
                    resource_id: n.resource_id,
                    resource_name: resource.name.clone(),
                    requester_id: n.requester_id,
                    requester_name: tables.user_name(n.requester_id)?,
                })
            })
            .collect())
    }

    async fn pending_count_for_owner(&self, owner_id: UserId) -> AppResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables
            .notifications
            .iter()
            .filter(|n| n.owner_id == owner_id && n.is_pending())
            .count() as i64)
    }

    async fn pending_for_resource(&self, resource_id: ResourceId) -> AppResult<Vec<Notification>> {
        let tables = self.tables.read().await;
        Ok(tables
            .notifications
            .iter()
            .filter(|n| n.resource_id == resource_id && n.is_pending())
            .cloned()
            .collect())
    }

    async fn pending_count_for_resource(&self, resource_id: ResourceId) -> AppResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.pending_count(resource_id))
    }

    async fn mark_resolved(
        &self,
        id: NotificationId,
        status: NotificationStatus,
    ) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl LendingStore for MemoryStore {
    async fn resolve(
        &self,
        id: NotificationId,
        decision: RequestDecision,
        policy: ApprovalPolicy,
    ) -> AppResult<ResolvedRequest> {
        let mut tables = self.tables.write().await;

        let n_idx = tables
            .notifications
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| AppError::not_found("No pending notification found"))?;
        let resource_id = tables.notifications[n_idx].resource_id;
        let r_idx = tables
            .resources
            .iter()
            .position(|r| r.id == resource_id)
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Notification {id} references missing resource {resource_id}"
                ))
            })?;

        // Plan before writing so a rejected plan leaves both rows untouched.
        let plan = plan_resolution(
            &tables.notifications[n_idx],
            tables.resources[r_idx].loan_state()?,
            decision,
            policy,
        )?;
        debug!(notification_id = %id, ?plan, "Applying resolution plan");

        tables.notifications[n_idx].status = plan.notification_status;
        if let Some(state) = plan.loan_state {
            tables.resources[r_idx].apply_loan_state(state);
        }

        Ok(ResolvedRequest {
            notification: tables.notifications[n_idx].clone(),
            resource: tables.resources[r_idx].clone(),
            displaced_borrower: plan.displaced_borrower,
        })
    }
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn owned_view(&self, user_id: UserId) -> AppResult<Vec<OwnedItem>> {
        let tables = self.tables.read().await;
        Ok(tables
            .resources
            .iter()
            .filter(|r| r.owner_id == user_id)
            .map(|r| OwnedItem {
                resource: r.clone(),
                borrower_name: r.borrower_id.and_then(|id| tables.user_name(id)),
            })
            .collect())
    }

    async fn borrowed_view(&self, user_id: UserId) -> AppResult<Vec<BorrowedItem>> {
        let tables = self.tables.read().await;
        Ok(tables
            .resources
            .iter()
            .filter(|r| r.borrower_id == Some(user_id))
            .map(|r| BorrowedItem {
                resource: r.clone(),
                owner_name: tables.user_name(r.owner_id).unwrap_or_default(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::error::ErrorKind;
    use campus_entity::lending::LoanState;

    async fn user(store: &MemoryStore, name: &str) -> User {
        UserStore::create(
            store,
            &CreateUser {
                name: name.to_string(),
                email: format!("{}@x.edu", name.to_lowercase()),
                password_hash: "hash".to_string(),
            },
        )
        .await
        .unwrap()
    }

    async fn resource(store: &MemoryStore, owner: &User) -> Resource {
        ResourceStore::create(
            store,
            &CreateResource {
                name: "Calculus Notes".to_string(),
                category: "Notes".to_string(),
                description: "Chapters 1-4".to_string(),
                stored_file: format!("{}.pdf", ResourceId::new()),
                original_filename: "calc.pdf".to_string(),
                owner_id: owner.id,
            },
        )
        .await
        .unwrap()
    }

    async fn request(store: &MemoryStore, resource: &Resource, requester: &User) -> Notification {
        store
            .append(&CreateNotification {
                owner_id: resource.owner_id,
                requester_id: requester.id,
                resource_id: resource.id,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryStore::new();
        user(&store, "Alice").await;
        let err = UserStore::create(
            &store,
            &CreateUser {
                name: "Other".to_string(),
                email: "alice@x.edu".to_string(),
                password_hash: "hash".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_inbox_is_newest_first_with_names() {
        let store = MemoryStore::new();
        let alice = user(&store, "Alice").await;
        let bob = user(&store, "Bob").await;
        let carol = user(&store, "Carol").await;
        let notes = resource(&store, &alice).await;

        let first = request(&store, &notes, &bob).await;
        let second = request(&store, &notes, &carol).await;

        let inbox = store.list_for_owner(alice.id).await.unwrap();
        assert_eq!(inbox.len(), 2);
        assert_eq!(inbox[0].id, second.id);
        assert_eq!(inbox[0].requester_name, "Carol");
        assert_eq!(inbox[1].id, first.id);
        assert_eq!(inbox[1].resource_name, "Calculus Notes");

        assert_eq!(store.pending_count_for_owner(alice.id).await.unwrap(), 2);
        assert_eq!(store.pending_count_for_resource(notes.id).await.unwrap(), 2);
        assert!(store.list_for_owner(bob.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_approves_and_lends() {
        let store = MemoryStore::new();
        let alice = user(&store, "Alice").await;
        let bob = user(&store, "Bob").await;
        let notes = resource(&store, &alice).await;
        let pending = request(&store, &notes, &bob).await;

        let resolved = store
            .resolve(pending.id, RequestDecision::Approved, ApprovalPolicy::LastWriterWins)
            .await
            .unwrap();

        assert_eq!(resolved.notification.status, NotificationStatus::Approved);
        assert_eq!(
            resolved.resource.loan_state().unwrap(),
            LoanState::OnLoan { borrower: bob.id }
        );

        let err = store
            .resolve(pending.id, RequestDecision::Approved, ApprovalPolicy::LastWriterWins)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_rejected_plan_writes_nothing() {
        let store = MemoryStore::new();
        let alice = user(&store, "Alice").await;
        let bob = user(&store, "Bob").await;
        let carol = user(&store, "Carol").await;
        let notes = resource(&store, &alice).await;
        let first = request(&store, &notes, &bob).await;
        let second = request(&store, &notes, &carol).await;

        store
            .resolve(first.id, RequestDecision::Approved, ApprovalPolicy::RejectIfOnLoan)
            .await
            .unwrap();
        let err = store
            .resolve(second.id, RequestDecision::Approved, ApprovalPolicy::RejectIfOnLoan)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::State);

        let still_pending = NotificationLedger::find_by_id(&store, second.id)
            .await
            .unwrap()
            .unwrap();
        assert!(still_pending.is_pending());
        let lent = ResourceStore::find_by_id(&store, notes.id).await.unwrap().unwrap();
        assert_eq!(lent.borrower_id, Some(bob.id));
    }

    #[tokio::test]
    async fn test_mark_resolved_does_not_check_status() {
        let store = MemoryStore::new();
        let alice = user(&store, "Alice").await;
        let bob = user(&store, "Bob").await;
        let notes = resource(&store, &alice).await;
        let pending = request(&store, &notes, &bob).await;

        assert!(store.mark_resolved(pending.id, NotificationStatus::Denied).await.unwrap());
        assert!(store.mark_resolved(pending.id, NotificationStatus::Denied).await.unwrap());
        assert!(
            !store
                .mark_resolved(NotificationId::new(), NotificationStatus::Denied)
                .await
                .unwrap()
        );
        assert!(store.pending_for_resource(notes.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_views() {
        let store = MemoryStore::new();
        let alice = user(&store, "Alice").await;
        let bob = user(&store, "Bob").await;
        assert!(store.owned_view(alice.id).await.unwrap().is_empty());

        let notes = resource(&store, &alice).await;
        let pending = request(&store, &notes, &bob).await;
        store
            .resolve(pending.id, RequestDecision::Approved, ApprovalPolicy::LastWriterWins)
            .await
            .unwrap();

        let owned = store.owned_view(alice.id).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].borrower_name.as_deref(), Some("Bob"));

        let borrowed = store.borrowed_view(bob.id).await.unwrap();
        assert_eq!(borrowed.len(), 1);
        assert_eq!(borrowed[0].owner_name, "Alice");
        assert!(store.borrowed_view(alice.id).await.unwrap().is_empty());
    }
}
