//! JSON body extractor.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use ontrack_core::error::AppError;

use crate::error::ApiError;

/// `Json<T>` whose rejection is an `INVALID_JSON` error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError(AppError::malformed(format!(
                "Invalid request body: {}",
                rejection.body_text()
            ))
            .with_code("INVALID_JSON"))),
        }
    }
}
