//! CLI command definitions and dispatch.

pub mod dashboard;
pub mod migrate;
pub mod notification;
pub mod resource;

use clap::{Parser, Subcommand};

use campus_core::config::AppConfig;
use campus_core::error::AppError;
use campus_database::{DatabasePool, Stores};

use crate::output::OutputFormat;

/// CampusShare: campus resource lending
#[derive(Debug, Parser)]
#[command(name = "campus-cli", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// Environment overlay to load
    #[arg(short, long, env = "CAMPUS_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Resource catalog
    Resources(resource::ResourceArgs),
    /// Owner inboxes
    Notifications(notification::NotificationArgs),
    /// Owned and borrowed items for one user
    Dashboard(dashboard::DashboardArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;
        ensure_persistent(&config, &self.env)?;
        let pool = DatabasePool::connect(&config.database).await?;

        let result = match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &pool).await,
            Commands::Resources(args) => resource::execute(args, &stores(&pool), self.format).await,
            Commands::Notifications(args) => {
                notification::execute(args, &stores(&pool), self.format).await
            }
            Commands::Dashboard(args) => dashboard::execute(args, &stores(&pool), self.format).await,
        };

        pool.close().await;
        result
    }
}

/// The CLI works against PostgreSQL only; the in-memory store lives inside
/// the server process.
fn ensure_persistent(config: &AppConfig, env: &str) -> Result<(), AppError> {
    if config.database.is_memory() {
        return Err(AppError::configuration(format!(
            "Environment '{env}' uses the in-memory store, which the CLI cannot reach. \
             Set CAMPUS__DATABASE__URL to a PostgreSQL URL or pass --env with a database-backed environment"
        )));
    }
    Ok(())
}

fn stores(pool: &DatabasePool) -> Stores {
    Stores::postgres(pool.pool().clone())
}
