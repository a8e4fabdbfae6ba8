//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let storage = state.blobs.health_check().await;

    let (database, database_ok) = match &state.database {
        None => ("memory", true),
        Some(pool) => match pool.health_check().await {
            Ok(true) => ("connected", true),
            Ok(false) => ("unreachable", false),
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                ("unreachable", false)
            }
        },
    };

    Json(ApiResponse::ok(HealthResponse {
        status: if storage && database_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        storage,
        database: database.to_string(),
    }))
}
