//! CampusShare server: campus resource lending.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use campus_core::config::AppConfig;
use campus_core::error::AppError;
use campus_database::{DatabasePool, MemoryStore, Stores};
use campus_storage::{BlobStore, LocalStorageProvider};

#[tokio::main]
async fn main() {
    let env = std::env::var("CAMPUS_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CampusShare v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Stores ───────────────────────────────────────────
    let (stores, db_pool) = if config.database.is_memory() {
        tracing::warn!("Using the in-memory store; data is lost on shutdown");
        (Stores::memory(MemoryStore::new()), None)
    } else {
        let pool = DatabasePool::connect(&config.database).await?;
        campus_database::migration::run_migrations(pool.pool()).await?;
        (Stores::postgres(pool.pool().clone()), Some(pool))
    };

    // ── Step 2: Upload storage ───────────────────────────────────
    let provider = LocalStorageProvider::new(&config.storage.upload_dir).await?;
    let blobs = Arc::new(BlobStore::new(Arc::new(provider), &config.storage));
    tracing::info!(
        upload_dir = %config.storage.upload_dir,
        max_upload_size_bytes = config.storage.max_upload_size_bytes,
        "Upload storage ready"
    );

    // ── Step 3: HTTP server ──────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    tracing::info!(
        approval_policy = %config.lending.approval_policy,
        "Lending policy"
    );

    let mut app_state = campus_api::AppState::new(config, stores, blobs);
    if let Some(pool) = &db_pool {
        app_state = app_state.with_database(pool.clone());
    }
    let app = campus_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CampusShare server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 4: Release the pool ─────────────────────────────────
    if let Some(pool) = db_pool {
        if tokio::time::timeout(grace, pool.close()).await.is_err() {
            tracing::warn!("Database pool did not close within the grace period");
        }
    }

    tracing::info!("CampusShare server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
