//! JSON body extractor that runs `validator` rules.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use campus_core::error::AppError;

use crate::error::{ApiError, validation_error};

/// Deserializes a JSON body and validates it. Malformed bodies and rule
/// violations are both `Validation` errors.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}
