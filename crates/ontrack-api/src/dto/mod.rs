//! Response data transfer objects.

pub mod response;

pub use response::{ApiResponse, HealthResponse, ReadyResponse, TodoResponse};
