//! Registration and login handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use campus_entity::user::UserSummary;
use campus_service::RegisterUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserSummary>>), ApiError> {
    let user = state
        .user_service
        .register(RegisterUser {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// POST /api/login
///
/// Returns the user summary; no token or session is issued.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<UserSummary>>, ApiError> {
    let user = state.user_service.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(user)))
}
