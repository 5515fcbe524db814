//! # ontrack-api
//!
//! HTTP API layer for OnTrack built on Axum.
//!
//! Provides the todo REST endpoints, health probes, middleware (CORS,
//! compression, request ids, panic recovery, request logging), extractors
//! that turn every rejection into the failure envelope, DTOs, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
