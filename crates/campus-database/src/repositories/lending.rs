//! Transactional resolution of borrow requests.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use campus_core::config::ApprovalPolicy;
use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::NotificationId;
use campus_entity::lending::{RequestDecision, plan_resolution};

use super::notification::NotificationRepository;
use super::resource::ResourceRepository;
use crate::store::{LendingStore, ResolvedRequest};

/// Applies resolution plans inside a single PostgreSQL transaction.
#[derive(Debug, Clone)]
pub struct LendingRepository {
    pool: PgPool,
}

impl LendingRepository {
    /// Create a new lending repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LendingStore for LendingRepository {
    async fn resolve(
        &self,
        id: NotificationId,
        decision: RequestDecision,
        policy: ApprovalPolicy,
    ) -> AppResult<ResolvedRequest> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        // Lock order is notification, then resource. Dropping `tx` on any
        // early return rolls back.
        let notification = NotificationRepository::lock(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("No pending notification found"))?;

        let resource = ResourceRepository::lock(&mut tx, notification.resource_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Notification {id} references missing resource {}",
                    notification.resource_id
                ))
            })?;

        let plan = plan_resolution(&notification, resource.loan_state()?, decision, policy)?;
        debug!(notification_id = %id, ?plan, "Applying resolution plan");

        let notification = NotificationRepository::update_status(&mut tx, id, plan.notification_status)
            .await?
            .ok_or_else(|| AppError::not_found("No pending notification found"))?;

        let resource = match plan.loan_state {
            Some(state) => ResourceRepository::set_loan_state(&mut tx, resource.id, state).await?,
            None => resource,
        };

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit resolution", e)
        })?;

        Ok(ResolvedRequest {
            notification,
            resource,
            displaced_borrower: plan.displaced_borrower,
        })
    }
}
