//! Todo use cases.

pub mod request;
pub mod service;
pub mod validator;

pub use request::{CreateTodoRequest, ListTodosRequest, UpdateTodoRequest};
pub use service::TodoService;
pub use validator::TodoValidator;
