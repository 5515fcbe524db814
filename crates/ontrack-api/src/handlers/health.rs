//! Health check handlers.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::{HealthResponse, ReadyResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        time: Utc::now(),
    })
}

/// GET /ready
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyResponse>, ApiError> {
    state.todo_service.health_check().await?;
    Ok(Json(ReadyResponse {
        status: "ready".to_string(),
        time: Utc::now(),
    }))
}
