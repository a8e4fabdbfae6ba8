//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use campus_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::State => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Storage
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = status_for(error.kind);

        // Server faults are logged with their cause and hidden from clients.
        let message = if status.is_server_error() {
            tracing::error!(kind = %error.kind, error = %error.message, source = ?error.source, "Request failed");
            "Internal server error".to_string()
        } else {
            error.message
        };

        let body = ApiErrorResponse {
            error: error.kind.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Response wrapper so handlers can return `Result<_, ApiError>` and use `?`
/// on any `AppError`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

/// Converts `validator` errors into one validation message.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for '{field}'"),
            })
        })
        .collect();
    messages.sort();
    if messages.is_empty() {
        AppError::validation("Invalid request")
    } else {
        AppError::validation(messages.join("; "))
    }
}
