//! Route definitions for the OnTrack HTTP API.
//!
//! Todo routes are mounted under `/api/v1`; the probes live at the root.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::Router;
use axum::routing::{get, patch};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes and JSON fallbacks.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", todo_routes())
        .merge(health_routes())
        .fallback(handlers::fallback::route_not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .with_state(state)
}

/// Todo CRUD and toggle
fn todo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::todo::list_todos).post(handlers::todo::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::todo::get_todo)
                .put(handlers::todo::update_todo)
                .delete(handlers::todo::delete_todo),
        )
        .route("/todos/{id}/toggle", patch(handlers::todo::toggle_todo))
}

/// Liveness and readiness probes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
}
