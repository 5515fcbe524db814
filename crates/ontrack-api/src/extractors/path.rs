//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use ontrack_core::error::AppError;

use crate::error::ApiError;

/// A todo id taken from the `{id}` path segment.
///
/// Anything other than a positive integer is rejected with `INVALID_ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError(invalid_id("missing")))?;
        parse_id(&raw).map(Self).map_err(ApiError)
    }
}

/// Parses a positive todo id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    match s.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid_id(s)),
    }
}

fn invalid_id(raw: &str) -> AppError {
    AppError::malformed(format!("Invalid todo ID: {raw}")).with_code("INVALID_ID")
}
