//! Resource catalog handlers.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use bytes::Bytes;

use campus_core::error::AppError;
use campus_core::types::UserId;
use campus_entity::resource::{Resource, ResourceListing};
use campus_service::NewResource;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::parse_id;
use crate::state::AppState;

/// GET /api/resources
pub async fn list_resources(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ResourceListing>>>, ApiError> {
    let resources = state.resource_service.list().await?;
    Ok(Json(ApiResponse::ok(resources)))
}

/// POST /api/resources — multipart upload with `file`, `name`, `category`,
/// `description` and `owner_id` fields.
pub async fn create_resource(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Resource>>), ApiError> {
    let mut name: Option<String> = None;
    let mut category: Option<String> = None;
    let mut description: Option<String> = None;
    let mut owner_id: Option<UserId> = None;
    let mut file_name: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "file" => {
                file_name = field.file_name().map(String::from);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            "name" | "category" | "description" | "owner_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                match field_name.as_str() {
                    "name" => name = Some(text),
                    "category" => category = Some(text),
                    "description" => description = Some(text),
                    _ => owner_id = Some(parse_id(text.trim())?),
                }
            }
            _ => {}
        }
    }

    let owner_id = owner_id.ok_or_else(|| AppError::validation("owner_id is required"))?;
    let original_filename = file_name
        .filter(|f| !f.is_empty())
        .ok_or_else(|| AppError::validation("file is required"))?;
    let data = data.ok_or_else(|| AppError::validation("file is required"))?;

    let resource = state
        .resource_service
        .create(NewResource {
            name: name.unwrap_or_default(),
            category: category.unwrap_or_default(),
            description: description.unwrap_or_default(),
            owner_id,
            original_filename,
            data,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resource))))
}
