//! JSON replies for unknown routes and unsupported methods.

use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;

use crate::error::ApiErrorResponse;

/// Any path with no route.
pub async fn route_not_found(uri: Uri) -> Response {
    ApiErrorResponse::new(
        "Not found",
        format!("The requested endpoint {} does not exist", uri.path()),
        "ROUTE_NOT_FOUND",
    )
    .into_response_with(StatusCode::NOT_FOUND)
}

/// A known path requested with a method it does not support.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    ApiErrorResponse::new(
        "Method Not Allowed",
        format!("Method {method} is not supported for {}", uri.path()),
        "METHOD_NOT_ALLOWED",
    )
    .into_response_with(StatusCode::METHOD_NOT_ALLOWED)
}
