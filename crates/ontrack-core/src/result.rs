//! Convenience result type alias for OnTrack.

use crate::error::AppError;

/// A specialized `Result` type for OnTrack operations.
pub type AppResult<T> = Result<T, AppError>;
