//! Request DTOs with validation.

use serde::Deserialize;
use validator::Validate;

use campus_core::types::UserId;

/// Registration request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Plaintext password. Strength is checked by the user service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Borrow request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BorrowRequest {
    /// The user asking to borrow.
    pub requester_id: UserId,
}

/// Owner decision on a pending request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RespondRequest {
    /// `approved` or `denied`.
    #[validate(length(min = 1, message = "Action is required"))]
    pub action: String,
}
