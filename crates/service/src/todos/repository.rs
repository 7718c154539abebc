use async_trait::async_trait;

use crate::errors::ServiceError;
use super::domain::{Category, CategoryRename, NewCategory, NewTodo, StoreStats, Todo, TodoPatch};

/// Storage abstraction for todos and categories.
///
/// Category operations own the cascade onto todos, so an implementation must
/// apply the category change and the todo updates as one step.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn list_todos(&self) -> Vec<Todo>;
    async fn create_todo(&self, input: NewTodo) -> Result<Todo, ServiceError>;
    async fn update_todo(&self, id: &str, patch: TodoPatch) -> Result<Todo, ServiceError>;
    async fn delete_todo(&self, id: &str) -> Result<(), ServiceError>;
    async fn todos_by_category(&self, category: &str) -> Vec<Todo>;

    async fn list_categories(&self) -> Vec<String>;
    async fn create_category(&self, input: NewCategory) -> Result<Category, ServiceError>;
    /// Returns the category under its new name.
    async fn rename_category(&self, name: &str, input: CategoryRename) -> Result<Category, ServiceError>;
    /// Returns how many todos were removed along with the category.
    async fn delete_category(&self, name: &str) -> Result<usize, ServiceError>;

    async fn stats(&self) -> StoreStats;
}
