//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use campus_core::config::DatabaseConfig;
use campus_core::error::{AppError, ErrorKind};

/// Wrapper around the sqlx PostgreSQL connection pool.
///
/// Connections are checked out per operation and returned to the pool when
/// the query or transaction finishes, on success and on error.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new database pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Successfully connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

impl From<PgPool> for DatabasePool {
    fn from(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Mask the password portion of a database URL for safe logging.
pub fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
