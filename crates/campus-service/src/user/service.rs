//! User registration and credential checks.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use campus_auth::password::{PasswordHasher, PasswordValidator};
use campus_core::error::AppError;
use campus_core::types::UserId;
use campus_database::store::UserStore;
use campus_entity::user::{CreateUser, User, UserSummary};

/// Handles the identity use cases.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Identity store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
}

/// Data submitted at registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    /// Display name.
    pub name: String,
    /// Email address, normalized before use.
    pub email: String,
    /// Plaintext password. Only ever hashed.
    pub password: String,
}

/// Trim and lowercase an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
        }
    }

    /// Registers a new user. A taken email is a `Conflict`.
    pub async fn register(&self, req: RegisterUser) -> Result<UserSummary, AppError> {
        let name = req.name.trim();
        let email = normalize_email(&req.email);
        if name.is_empty() || email.is_empty() || req.password.is_empty() {
            return Err(AppError::validation("Missing required fields"));
        }
        if !email.contains('@') {
            return Err(AppError::validation("Invalid email format"));
        }
        self.validator.validate(&req.password)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email is already registered"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user.summary())
    }

    /// Checks credentials and returns the user summary on a match.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSummary, AppError> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!("Login failed: unknown email");
            return Err(AppError::authentication("Invalid email or password"));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::authentication("Invalid email or password"));
        }

        info!(user_id = %user.id, "User logged in");
        Ok(user.summary())
    }

    /// Loads a user by id.
    pub async fn get(&self, id: UserId) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }
}
