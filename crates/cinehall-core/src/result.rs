//! Convenience result type alias for cinehall.

use crate::error::AppError;

/// A specialized `Result` type for cinehall operations.
pub type AppResult<T> = Result<T, AppError>;
