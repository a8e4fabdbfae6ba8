//! Route definitions for the CampusShare HTTP API.
//!
//! JSON routes are mounted under `/api`; stored uploads are served from
//! `/uploads`. Every handler receives `AppState` through Axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Room for multipart boundaries and the text fields around the file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = usize::try_from(state.config.storage.max_upload_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(resource_routes())
        .merge(notification_routes())
        .merge(user_routes())
        .merge(health_routes());

    let upload_routes =
        Router::new().route("/uploads/{filename}", get(handlers::files::serve_upload));

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(upload_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Registration and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Catalog, uploads, and borrow requests
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/resources",
            get(handlers::resource::list_resources).post(handlers::resource::create_resource),
        )
        .route(
            "/resources/{id}/request",
            post(handlers::lending::submit_request),
        )
        .route(
            "/resources/{id}/requests",
            get(handlers::notification::pending_for_resource),
        )
        // The segment is the stored file name here, not a resource id.
        .route(
            "/resources/{id}/download",
            get(handlers::files::download),
        )
}

/// Owner decisions
fn notification_routes() -> Router<AppState> {
    Router::new().route(
        "/notifications/{id}/respond",
        post(handlers::lending::respond),
    )
}

/// Per-user inbox and dashboard
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{id}/notifications",
            get(handlers::notification::list_for_owner),
        )
        .route(
            "/users/{id}/notifications/pending-count",
            get(handlers::notification::pending_count),
        )
        .route("/users/{id}/dashboard", get(handlers::dashboard::dashboard))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
