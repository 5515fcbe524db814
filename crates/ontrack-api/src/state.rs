//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::{Duration, Instant};

use ontrack_core::config::AppConfig;
use ontrack_database::TodoRepository;
use ontrack_service::TodoService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Todo use cases
    pub todo_service: Arc<TodoService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wire the service graph on top of a repository.
    pub fn new(config: AppConfig, repo: Arc<dyn TodoRepository>) -> Self {
        let store_timeout = Duration::from_secs(config.server.store_timeout_seconds);
        Self {
            config: Arc::new(config),
            todo_service: Arc::new(TodoService::new(repo, store_timeout)),
            started_at: Instant::now(),
        }
    }
}
