//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Logs method, path, query, status, and latency.
///
/// Server errors log at `error`, client errors at `warn`, the rest at `info`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency_ms = start.elapsed().as_millis();
    let status = response.status();
    let path = uri.path();
    let query = uri.query().unwrap_or("");

    if status.is_server_error() {
        error!(%method, path, query, status = status.as_u16(), latency_ms, "HTTP request");
    } else if status.is_client_error() {
        warn!(%method, path, query, status = status.as_u16(), latency_ms, "HTTP request");
    } else {
        info!(%method, path, query, status = status.as_u16(), latency_ms, "HTTP request");
    }

    response
}
