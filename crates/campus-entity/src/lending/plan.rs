//! Transition planning for borrow requests.

use campus_core::config::ApprovalPolicy;
use campus_core::types::UserId;
use campus_core::{AppError, AppResult};

use super::decision::RequestDecision;
use super::state::LoanState;
use crate::notification::{Notification, NotificationStatus};
use crate::resource::Resource;

/// The writes that resolving one notification requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionPlan {
    /// Terminal status for the notification.
    pub notification_status: NotificationStatus,
    /// New loan state of the resource. `None` leaves the resource untouched.
    pub loan_state: Option<LoanState>,
    /// Borrower replaced by this approval, if any.
    pub displaced_borrower: Option<UserId>,
}

/// Check that `requester_id` may ask to borrow `resource`, returning it.
///
/// A missing resource is reported the same way as an unavailable one.
pub fn ensure_requestable(
    resource: Option<&Resource>,
    requester_id: UserId,
) -> AppResult<&Resource> {
    let Some(resource) = resource else {
        return Err(AppError::state("Resource not available for request"));
    };
    if !resource.loan_state()?.is_available() {
        return Err(AppError::state("Resource not available for request"));
    }
    if resource.is_owned_by(requester_id) {
        return Err(AppError::validation("You cannot request your own resource"));
    }
    Ok(resource)
}

/// Plan the resolution of `notification` given the resource's current state.
///
/// Approval does not require the resource to still be available. Under
/// [`ApprovalPolicy::LastWriterWins`] an existing borrower is replaced and
/// reported in `displaced_borrower`; under
/// [`ApprovalPolicy::RejectIfOnLoan`] the approval fails and nothing is
/// written.
pub fn plan_resolution(
    notification: &Notification,
    current: LoanState,
    decision: RequestDecision,
    policy: ApprovalPolicy,
) -> AppResult<ResolutionPlan> {
    let notification_status = notification.status.resolve(decision)?;

    match decision {
        RequestDecision::Denied => Ok(ResolutionPlan {
            notification_status,
            loan_state: None,
            displaced_borrower: None,
        }),
        RequestDecision::Approved => {
            let requester = notification.requester_id;
            let displaced_borrower = match current {
                LoanState::OnLoan { borrower } if borrower != requester => Some(borrower),
                _ => None,
            };

            if displaced_borrower.is_some() && policy == ApprovalPolicy::RejectIfOnLoan {
                return Err(AppError::state("Resource is already on loan"));
            }

            Ok(ResolutionPlan {
                notification_status,
                loan_state: Some(LoanState::OnLoan {
                    borrower: requester,
                }),
                displaced_borrower,
            })
        }
    }
}
