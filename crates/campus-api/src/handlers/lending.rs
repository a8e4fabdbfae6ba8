//! Borrow request handlers.

use axum::Json;
use axum::extract::{Path, State};

use campus_core::types::{NotificationId, ResourceId};
use campus_database::ResolvedRequest;
use campus_entity::lending::RequestDecision;
use campus_entity::notification::Notification;

use crate::dto::request::{BorrowRequest, RespondRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, parse_id};
use crate::state::AppState;

/// POST /api/resources/{id}/request
pub async fn submit_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<BorrowRequest>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let resource_id: ResourceId = parse_id(&id)?;
    let notification = state
        .lending_service
        .submit_request(resource_id, req.requester_id)
        .await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// POST /api/notifications/{id}/respond
pub async fn respond(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<RespondRequest>,
) -> Result<Json<ApiResponse<ResolvedRequest>>, ApiError> {
    let notification_id: NotificationId = parse_id(&id)?;
    let decision: RequestDecision = req.action.parse()?;
    let resolved = state
        .lending_service
        .resolve_request(notification_id, decision)
        .await?;
    Ok(Json(ApiResponse::ok(resolved)))
}
