//! Persisted resource status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Loan status column of a resource.
///
/// Only two statuses are persisted. A pending request does not change it.
/// On the wire the loaned status is spelled `"on loan"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resource_status", rename_all = "snake_case")]
pub enum ResourceStatus {
    /// Nobody holds the resource.
    #[serde(rename = "available")]
    Available,
    /// A borrower holds the resource.
    #[serde(rename = "on loan")]
    OnLoan,
}

impl ResourceStatus {
    /// Return the status as shown to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnLoan => "on loan",
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceStatus {
    type Err = campus_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "on loan" | "on_loan" => Ok(Self::OnLoan),
            _ => Err(campus_core::AppError::validation(format!(
                "Invalid resource status: '{s}'. Expected one of: available, on loan"
            ))),
        }
    }
}
