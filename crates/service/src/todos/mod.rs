//! Todo store: domain, repository seam and the in-memory implementation.

pub mod domain;
pub mod memory;
pub mod repository;

pub use domain::{Category, CategoryRename, NewCategory, NewTodo, StoreStats, Todo, TodoPatch};
pub use memory::MemoryTodoStore;
pub use repository::TodoRepository;
