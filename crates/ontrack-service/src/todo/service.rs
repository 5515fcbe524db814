//! Todo use cases: create, read, list, update, delete, toggle.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use ontrack_core::error::{AppError, FieldError};
use ontrack_core::result::AppResult;
use ontrack_core::types::{PageResponse, Patch};
use ontrack_database::TodoRepository;
use ontrack_entity::todo::{NewTodo, Todo};

use super::request::{CreateTodoRequest, ListTodosRequest, UpdateTodoRequest};
use super::validator::TodoValidator;

/// Orchestrates validation, normalization, and persistence of todos.
///
/// Update and toggle are read-modify-write without row locking, so two
/// concurrent writers to the same id resolve as last-write-wins.
#[derive(Debug, Clone)]
pub struct TodoService {
    /// Backing store.
    repo: Arc<dyn TodoRepository>,
    /// Request rule checker.
    validator: TodoValidator,
    /// Upper bound on each store call.
    store_timeout: Duration,
}

impl TodoService {
    /// Creates a new todo service.
    pub fn new(repo: Arc<dyn TodoRepository>, store_timeout: Duration) -> Self {
        Self {
            repo,
            validator: TodoValidator::new(),
            store_timeout,
        }
    }

    /// Validates, trims, and persists a new todo.
    pub async fn create(&self, req: CreateTodoRequest) -> AppResult<Todo> {
        reject_invalid(self.validator.validate_create(&req))?;

        let title = req.title.trim().to_string();
        if title.is_empty() {
            return Err(empty_title());
        }
        let data = NewTodo {
            title,
            description: req.description.as_deref().and_then(normalize_description),
        };

        info!(title = %data.title, "Creating new todo");
        let todo = self.store("create", self.repo.create(&data)).await?;
        info!(todo_id = todo.id, "Todo created");
        Ok(todo)
    }

    /// Fetches a single todo.
    pub async fn get(&self, id: i64) -> AppResult<Todo> {
        debug!(todo_id = id, "Fetching todo");
        self.store("get_by_id", self.repo.get_by_id(id)).await
    }

    /// Lists one page of todos plus the total matching count.
    ///
    /// The page and the count are two separate store calls, so under
    /// concurrent writes they may disagree.
    pub async fn list(&self, req: ListTodosRequest) -> AppResult<PageResponse<Todo>> {
        reject_invalid(self.validator.validate_filter(&req))?;

        let filter = req.to_filter();
        debug!(?filter, "Listing todos");

        let items = self.store("get_all", self.repo.get_all(&filter)).await?;
        let total = self.store("count", self.repo.count(&filter)).await?;

        debug!(returned = items.len(), total, "Todos listed");
        Ok(PageResponse::new(items, &filter.page, total))
    }

    /// Applies the fields present in `req` to an existing todo.
    pub async fn update(&self, id: i64, req: UpdateTodoRequest) -> AppResult<Todo> {
        let mut todo = self.store("get_by_id", self.repo.get_by_id(id)).await?;
        reject_invalid(self.validator.validate_update(&req))?;

        if let Patch::Value(title) = &req.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(empty_title());
            }
            todo.title = title.to_string();
        }

        match &req.description {
            Patch::Absent => {}
            Patch::Null => todo.description = None,
            Patch::Value(description) => {
                todo.description = normalize_description(description);
            }
        }

        if let Patch::Value(completed) = req.completed {
            todo.completed = completed;
        }

        info!(todo_id = id, "Updating todo");
        let todo = self.store("update", self.repo.update(&todo)).await?;
        info!(todo_id = id, completed = todo.completed, "Todo updated");
        Ok(todo)
    }

    /// Hard-deletes a todo.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        info!(todo_id = id, "Deleting todo");
        self.store("delete", self.repo.delete(id)).await?;
        info!(todo_id = id, "Todo deleted");
        Ok(())
    }

    /// Flips the completion flag of a todo.
    pub async fn toggle_complete(&self, id: i64) -> AppResult<Todo> {
        let mut todo = self.store("get_by_id", self.repo.get_by_id(id)).await?;
        todo.toggle();

        let todo = self.store("update", self.repo.update(&todo)).await?;
        info!(todo_id = id, completed = todo.completed, "Todo completion toggled");
        Ok(todo)
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<()> {
        self.store("health_check", self.repo.health_check())
            .await
            .map_err(|e| AppError::service_unavailable(format!("Store is not ready: {e}")))
    }

    /// Runs one store call under the configured deadline and logs failures.
    async fn store<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = AppResult<T>>,
    ) -> AppResult<T> {
        let result = match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AppError::timeout(format!(
                "Store call '{operation}' exceeded {}ms",
                self.store_timeout.as_millis()
            ))
            .with_code("STORE_TIMEOUT")),
        };

        if let Err(e) = &result {
            if e.is_not_found() {
                warn!(operation, error = %e, "Todo not found");
            } else {
                error!(operation, error = %e, source = ?e.source, "Store call failed");
            }
        }
        result
    }
}

fn reject_invalid(errors: Vec<FieldError>) -> AppResult<()> {
    if errors.is_empty() {
        return Ok(());
    }
    warn!(?errors, "Validation failed");
    Err(AppError::invalid_fields(errors))
}

fn empty_title() -> AppError {
    AppError::invalid_fields(vec![FieldError::new(
        "title",
        "Title cannot be empty or contain only whitespace",
        "notblank",
    )])
}

fn normalize_description(description: &str) -> Option<String> {
    let trimmed = description.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
