//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use campus_core::error::{AppError, ErrorKind};
use campus_core::result::AppResult;
use campus_core::types::UserId;
use campus_entity::user::{CreateUser, User};

use crate::store::UserStore;

/// Repository for user records.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email is already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }
}
