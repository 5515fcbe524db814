//! Repository capability trait.

use std::fmt;

use async_trait::async_trait;

use ontrack_core::error::AppError;
use ontrack_core::result::AppResult;
use ontrack_core::types::TodoFilter;
use ontrack_entity::todo::{NewTodo, Todo};

/// Persistence gateway for todos. The service layer depends only on this trait.
#[async_trait]
pub trait TodoRepository: fmt::Debug + Send + Sync + 'static {
    /// Insert a new todo; the store assigns id and timestamps.
    async fn create(&self, data: &NewTodo) -> AppResult<Todo>;

    /// Fetch a todo, failing with `NotFound` when no row has this id.
    async fn get_by_id(&self, id: i64) -> AppResult<Todo>;

    /// Fetch one page of todos matching the filter, newest first.
    async fn get_all(&self, filter: &TodoFilter) -> AppResult<Vec<Todo>>;

    /// Count all todos matching the filter, ignoring paging.
    async fn count(&self, filter: &TodoFilter) -> AppResult<u64>;

    /// Write every mutable column of an existing todo and bump `updated_at`.
    async fn update(&self, todo: &Todo) -> AppResult<Todo>;

    /// Hard-delete a todo, failing with `NotFound` when nothing was removed.
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<()>;
}

/// The error every implementation returns for a missing id.
pub fn todo_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Todo with ID {id} not found")).with_code("TODO_NOT_FOUND")
}
