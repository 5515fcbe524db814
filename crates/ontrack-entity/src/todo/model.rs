//! Todo entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Database-assigned identifier.
    pub id: i64,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Trimmed description; `None` rather than empty.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Flip the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Data required to insert a todo. New todos always start incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Trimmed description, absent when empty.
    pub description: Option<String>,
}
