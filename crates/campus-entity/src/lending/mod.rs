//! The resource lending state machine.
//!
//! A resource is either [`LoanState::Available`] or
//! [`LoanState::OnLoan`]. Requests live in the notification ledger and do
//! not change the resource. Resolving a request is planned here by
//! [`plan_resolution`] and written atomically by the store.

pub mod decision;
pub mod plan;
pub mod state;

pub use decision::RequestDecision;
pub use plan::{ResolutionPlan, ensure_requestable, plan_resolution};
pub use state::LoanState;
