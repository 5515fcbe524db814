//! # ontrack-service
//!
//! Business logic for OnTrack. [`TodoService`] validates and normalizes
//! requests, then drives a [`ontrack_database::TodoRepository`] with a
//! bounded wait on every store call.
//!
//! Dependencies are provided at construction time via `Arc` references.

pub mod todo;

pub use todo::{
    CreateTodoRequest, ListTodosRequest, TodoService, TodoValidator, UpdateTodoRequest,
};
