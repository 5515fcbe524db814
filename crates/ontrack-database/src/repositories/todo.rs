//! PostgreSQL todo repository.

use async_trait::async_trait;
use sqlx::PgPool;

use ontrack_core::error::{AppError, ErrorKind};
use ontrack_core::result::AppResult;
use ontrack_core::types::TodoFilter;
use ontrack_entity::todo::{NewTodo, Todo};

use super::traits::{TodoRepository, todo_not_found};

const SELECT_PAGE: &str = "SELECT * FROM todos \
     WHERE ($1::BOOLEAN IS NULL OR completed = $1) \
     AND ($2::TEXT IS NULL OR title ILIKE $2 OR description ILIKE $2) \
     ORDER BY created_at DESC, id DESC LIMIT $3 OFFSET $4";

const COUNT_MATCHING: &str = "SELECT COUNT(*) FROM todos \
     WHERE ($1::BOOLEAN IS NULL OR completed = $1) \
     AND ($2::TEXT IS NULL OR title ILIKE $2 OR description ILIKE $2)";

/// Repository for todo CRUD against the `todos` table.
#[derive(Debug, Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    /// Create a new todo repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn create(&self, data: &NewTodo) -> AppResult<Todo> {
        sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (title, description, completed) \
             VALUES ($1, $2, FALSE) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create todo", e))
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Todo> {
        sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get todo", e))?
            .ok_or_else(|| todo_not_found(id))
    }

    async fn get_all(&self, filter: &TodoFilter) -> AppResult<Vec<Todo>> {
        sqlx::query_as::<_, Todo>(SELECT_PAGE)
            .bind(filter.completed)
            .bind(filter.search().map(like_pattern))
            .bind(to_i64(filter.limit()))
            .bind(to_i64(filter.offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list todos", e))
    }

    async fn count(&self, filter: &TodoFilter) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar(COUNT_MATCHING)
            .bind(filter.completed)
            .bind(filter.search().map(like_pattern))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count todos", e))?;
        Ok(total.max(0) as u64)
    }

    async fn update(&self, todo: &Todo) -> AppResult<Todo> {
        sqlx::query_as::<_, Todo>(
            "UPDATE todos SET title = $2, description = $3, completed = $4, \
             updated_at = GREATEST(NOW(), created_at) WHERE id = $1 RETURNING *",
        )
        .bind(todo.id)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update todo", e))?
        .ok_or_else(|| todo_not_found(todo.id))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete todo", e))?;

        if result.rows_affected() == 0 {
            return Err(todo_not_found(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

/// Build an `ILIKE` pattern matching `term` as a literal substring.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
