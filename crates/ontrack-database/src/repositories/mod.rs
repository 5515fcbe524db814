//! Todo repository trait and its implementations.

pub mod memory;
pub mod todo;
pub mod traits;

pub use memory::InMemoryTodoRepository;
pub use todo::PgTodoRepository;
pub use traits::TodoRepository;
