//! Owner decision on a borrow request.

use campus_core::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The action an owner takes on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestDecision {
    /// Lend the resource to the requester.
    Approved,
    /// Refuse the request.
    Denied,
}

impl RequestDecision {
    /// Return the decision as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for RequestDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestDecision {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            _ => Err(AppError::validation(format!(
                "Invalid action: '{s}'. Expected one of: approved, denied"
            ))),
        }
    }
}
