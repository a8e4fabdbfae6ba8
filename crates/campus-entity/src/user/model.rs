//! User entity model.

use campus_core::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user. Immutable after registration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Normalized (trimmed, lowercase) email address. Unique.
    pub email: String,
    /// Argon2 password hash in PHC format.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public view of this user.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// The user data returned by registration and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}
