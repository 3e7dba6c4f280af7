//! Convenience result type alias for Stratus.

use crate::error::AppError;

/// A specialized `Result` type for Stratus operations.
pub type AppResult<T> = Result<T, AppError>;
