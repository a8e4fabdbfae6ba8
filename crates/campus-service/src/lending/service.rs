//! The lending workflow: submitting and resolving borrow requests.

use std::sync::Arc;

use tracing::{info, warn};

use campus_core::config::ApprovalPolicy;
use campus_core::error::AppError;
use campus_core::types::{NotificationId, ResourceId, UserId};
use campus_database::store::{
    LendingStore, NotificationLedger, ResolvedRequest, ResourceStore, UserStore,
};
use campus_entity::lending::{RequestDecision, ensure_requestable};
use campus_entity::notification::{CreateNotification, Notification};

/// Drives the resource lending state machine.
#[derive(Debug, Clone)]
pub struct LendingService {
    resources: Arc<dyn ResourceStore>,
    users: Arc<dyn UserStore>,
    ledger: Arc<dyn NotificationLedger>,
    lending: Arc<dyn LendingStore>,
    policy: ApprovalPolicy,
}

impl LendingService {
    /// Creates a new lending service.
    pub fn new(
        resources: Arc<dyn ResourceStore>,
        users: Arc<dyn UserStore>,
        ledger: Arc<dyn NotificationLedger>,
        lending: Arc<dyn LendingStore>,
        policy: ApprovalPolicy,
    ) -> Self {
        Self {
            resources,
            users,
            ledger,
            lending,
            policy,
        }
    }

    /// The approval policy in force.
    pub fn policy(&self) -> ApprovalPolicy {
        self.policy
    }

    /// Files a pending request for an available resource.
    ///
    /// No reservation is placed on the resource; several requests for the
    /// same resource may be pending at once.
    pub async fn submit_request(
        &self,
        resource_id: ResourceId,
        requester_id: UserId,
    ) -> Result<Notification, AppError> {
        if self.users.find_by_id(requester_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Requester {requester_id} not found"
            )));
        }

        let found = self.resources.find_by_id(resource_id).await?;
        let resource = ensure_requestable(found.as_ref(), requester_id)?;

        let notification = self
            .ledger
            .append(&CreateNotification {
                owner_id: resource.owner_id,
                requester_id,
                resource_id,
            })
            .await?;

        info!(
            notification_id = %notification.id,
            resource_id = %resource_id,
            user_id = %requester_id,
            "Borrow request submitted"
        );
        Ok(notification)
    }

    /// Applies the owner's decision to a pending request.
    ///
    /// The notification and resource updates commit together. A notification
    /// that is missing or no longer pending is `NotFound`.
    pub async fn resolve_request(
        &self,
        notification_id: NotificationId,
        decision: RequestDecision,
    ) -> Result<ResolvedRequest, AppError> {
        let resolved = self
            .lending
            .resolve(notification_id, decision, self.policy)
            .await?;

        if let Some(displaced) = resolved.displaced_borrower {
            warn!(
                notification_id = %notification_id,
                resource_id = %resolved.resource.id,
                displaced_borrower = %displaced,
                new_borrower = %resolved.notification.requester_id,
                "Approval replaced the current borrower"
            );
        }

        info!(
            notification_id = %notification_id,
            resource_id = %resolved.resource.id,
            decision = %decision,
            "Borrow request resolved"
        );
        Ok(resolved)
    }
}
