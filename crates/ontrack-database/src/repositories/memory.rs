//! In-memory todo repository.
//!
//! Used by tests and local runs without PostgreSQL. Follows the same
//! ordering, filtering, and not-found rules as [`super::PgTodoRepository`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use ontrack_core::result::AppResult;
use ontrack_core::types::TodoFilter;
use ontrack_entity::todo::{NewTodo, Todo};

use super::traits::{TodoRepository, todo_not_found};

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Todo>,
}

/// A `RwLock`-guarded map standing in for the `todos` table.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    table: RwLock<Table>,
}

impl InMemoryTodoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn matching<'a>(table: &'a Table, filter: &'a TodoFilter) -> impl Iterator<Item = &'a Todo> {
        table
            .rows
            .values()
            .filter(|t| filter.matches(&t.title, t.description.as_deref(), t.completed))
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, data: &NewTodo) -> AppResult<Todo> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id: table.next_id,
            title: data.title.clone(),
            description: data.description.clone(),
            completed: false,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Todo> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| todo_not_found(id))
    }

    async fn get_all(&self, filter: &TodoFilter) -> AppResult<Vec<Todo>> {
        let table = self.table.read().await;
        let mut todos: Vec<Todo> = Self::matching(&table, filter).cloned().collect();
        todos.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        let offset = usize::try_from(filter.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(filter.limit()).unwrap_or(usize::MAX);
        Ok(todos.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self, filter: &TodoFilter) -> AppResult<u64> {
        let table = self.table.read().await;
        Ok(Self::matching(&table, filter).count() as u64)
    }

    async fn update(&self, todo: &Todo) -> AppResult<Todo> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .get_mut(&todo.id)
            .ok_or_else(|| todo_not_found(todo.id))?;
        row.title = todo.title.clone();
        row.description = todo.description.clone();
        row.completed = todo.completed;
        row.updated_at = Utc::now().max(row.created_at);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| todo_not_found(id))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}
