//! Panic recovery.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::Response;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::ApiErrorResponse;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Catches handler panics and answers with a 500 envelope.
pub fn build_catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");

    ApiErrorResponse::new(
        "Internal server error",
        "An unexpected error occurred",
        "INTERNAL_ERROR",
    )
    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
