//! Dashboard handler.

use axum::Json;
use axum::extract::{Path, State};

use campus_core::types::UserId;
use campus_service::Dashboard;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::parse_id;
use crate::state::AppState;

/// GET /api/users/{id}/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Dashboard>>, ApiError> {
    let user_id: UserId = parse_id(&id)?;
    let dashboard = state.dashboard_service.for_user(user_id).await?;
    Ok(Json(ApiResponse::ok(dashboard)))
}
