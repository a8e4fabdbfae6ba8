//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Seconds since the router was built.
    pub uptime_seconds: u64,
    /// Whether the upload directory is reachable.
    pub storage: bool,
    /// `connected`, `unreachable`, or `memory` when no database is configured.
    pub database: String,
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count.
    pub count: i64,
}
