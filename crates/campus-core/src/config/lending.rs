//! Lending workflow configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What happens when an owner approves a request for a resource that is
/// already on loan to somebody else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalPolicy {
    /// The approval is applied unconditionally and replaces the borrower.
    #[default]
    LastWriterWins,
    /// The approval fails with a state error and nothing is written.
    RejectIfOnLoan,
}

impl fmt::Display for ApprovalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastWriterWins => write!(f, "last_writer_wins"),
            Self::RejectIfOnLoan => write!(f, "reject_if_on_loan"),
        }
    }
}

/// Lending workflow settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LendingConfig {
    /// Approval policy for resources that are already on loan.
    #[serde(default)]
    pub approval_policy: ApprovalPolicy,
}
