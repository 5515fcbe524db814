//! Application builder: wires router, middleware, and state into an Axum app.

use std::future::Future;
use std::time::Duration;

use axum::Router;
use axum::middleware::from_fn;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use ontrack_core::error::{AppError, ErrorKind};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::middleware::panic::build_catch_panic_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(build_catch_panic_layer())
        .layer(from_fn(request_logging))
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Serves the app until `shutdown` resolves, then waits up to the configured
/// grace period for in-flight requests.
pub async fn run_server(
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    let addr = state.config.server.bind_address();
    let grace = Duration::from_secs(state.config.server.shutdown_grace_seconds);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
        })?;

    tracing::info!(%addr, "OnTrack server listening");

    let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
    let app = build_app(state);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.await;
                let _ = signalled_tx.send(());
            })
            .await
    });

    tokio::select! {
        joined = &mut server => return flatten(joined),
        _ = signalled_rx => {}
    }

    tracing::info!(
        grace_seconds = grace.as_secs(),
        "Shutdown signal received, draining requests"
    );
    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => flatten(joined),
        Err(_) => {
            tracing::warn!("Grace period elapsed with requests still in flight");
            server.abort();
            Ok(())
        }
    }
}

fn flatten(
    joined: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(AppError::internal(format!("Server error: {e}"))),
        Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
    }
}
