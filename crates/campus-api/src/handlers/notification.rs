//! Inbox handlers.

use axum::Json;
use axum::extract::{Path, State};

use campus_core::types::{ResourceId, UserId};
use campus_entity::notification::{Notification, NotificationView};

use crate::dto::response::{ApiResponse, CountResponse};
use crate::error::ApiError;
use crate::extractors::parse_id;
use crate::state::AppState;

/// GET /api/users/{id}/notifications
pub async fn list_for_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<NotificationView>>>, ApiError> {
    let owner_id: UserId = parse_id(&id)?;
    let inbox = state.notification_service.list_for_owner(owner_id).await?;
    Ok(Json(ApiResponse::ok(inbox)))
}

/// GET /api/users/{id}/notifications/pending-count
pub async fn pending_count(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let owner_id: UserId = parse_id(&id)?;
    let count = state
        .notification_service
        .pending_count_for_owner(owner_id)
        .await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// GET /api/resources/{id}/requests
pub async fn pending_for_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    let resource_id: ResourceId = parse_id(&id)?;
    let pending = state
        .notification_service
        .pending_for_resource(resource_id)
        .await?;
    Ok(Json(ApiResponse::ok(pending)))
}
