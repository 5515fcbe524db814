//! # ontrack-database
//!
//! PostgreSQL connection management, migrations, and the todo repository
//! trait with its PostgreSQL and in-memory implementations.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{InMemoryTodoRepository, PgTodoRepository, TodoRepository};
