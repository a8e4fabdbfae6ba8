//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod lending;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::lending::{ApprovalPolicy, LendingConfig};
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Credential settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Upload storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Lending workflow settings.
    #[serde(default)]
    pub lending: LendingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CAMPUS`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from TOML files located in `dir`.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CAMPUS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
