//! Convenience result type alias for CampusShare.

use crate::error::AppError;

/// A specialized `Result` type for CampusShare operations.
pub type AppResult<T> = Result<T, AppError>;
