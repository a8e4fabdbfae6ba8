//! Stored file pass-through.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use campus_core::error::AppError;
use campus_service::Download;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /uploads/{filename}
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let download = state.resource_service.open_upload(&filename).await?;
    Ok(file_response(download, None)?)
}

/// GET /api/resources/{filename}/download
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let download = state.resource_service.download(&filename).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        disposition_filename(&download.filename)
    );
    Ok(file_response(download, Some(disposition))?)
}

fn file_response(download: Download, disposition: Option<String>) -> Result<Response, AppError> {
    let content_type = download
        .meta
        .mime_type
        .clone()
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, download.meta.size_bytes);
    if let Some(disposition) = disposition {
        builder = builder.header(header::CONTENT_DISPOSITION, disposition);
    }

    builder
        .body(Body::from_stream(download.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))
}

/// Keeps a user-supplied name safe inside a quoted header value.
fn disposition_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_control() || !c.is_ascii() => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() {
        "download".to_string()
    } else {
        cleaned
    }
}
