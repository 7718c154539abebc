use std::sync::Arc;

use async_trait::async_trait;
use configs::RenamePolicy;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use super::domain::{non_empty, Category, CategoryRename, NewCategory, NewTodo, StoreStats, Todo, TodoPatch};
use super::repository::TodoRepository;

#[derive(Debug, Default)]
struct Collections {
    todos: Vec<Todo>,
    categories: Vec<Category>,
}

impl Collections {
    fn todo_index(&self, id: &str) -> Option<usize> {
        let id = Uuid::parse_str(id).ok()?;
        self.todos.iter().position(|t| t.id == id)
    }

    fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }
}

/// In-process todo store.
///
/// Both collections sit behind one lock, so a category cascade is never
/// observed half-applied. Listings come back in insertion order.
#[derive(Debug)]
pub struct MemoryTodoStore {
    inner: RwLock<Collections>,
    rename_policy: RenamePolicy,
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self { inner: RwLock::new(Collections::default()), rename_policy: RenamePolicy::default() }
    }
}

impl MemoryTodoStore {
    /// Create an empty store.
    pub fn new(rename_policy: RenamePolicy) -> Arc<Self> {
        Arc::new(Self { rename_policy, ..Self::default() })
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoStore {
    async fn list_todos(&self) -> Vec<Todo> {
        self.inner.read().await.todos.clone()
    }

    async fn create_todo(&self, input: NewTodo) -> Result<Todo, ServiceError> {
        let (title, category) = match (non_empty(input.title), non_empty(input.category)) {
            (Some(title), Some(category)) => (title, category),
            _ => return Err(ServiceError::validation("Title and category are required")),
        };
        let todo = Todo {
            id: Uuid::new_v4(),
            title,
            description: input.description,
            category,
        };
        self.inner.write().await.todos.push(todo.clone());
        info!(event = "todo_created", id = %todo.id, category = %todo.category, "todo created");
        Ok(todo)
    }

    async fn update_todo(&self, id: &str, patch: TodoPatch) -> Result<Todo, ServiceError> {
        let mut state = self.inner.write().await;
        let idx = state.todo_index(id).ok_or_else(|| ServiceError::not_found("TODO"))?;
        let todo = &mut state.todos[idx];
        patch.apply(todo);
        debug!(event = "todo_updated", id = %todo.id, "todo updated");
        Ok(todo.clone())
    }

    async fn delete_todo(&self, id: &str) -> Result<(), ServiceError> {
        let mut state = self.inner.write().await;
        let idx = state.todo_index(id).ok_or_else(|| ServiceError::not_found("TODO"))?;
        let removed = state.todos.remove(idx);
        info!(event = "todo_deleted", id = %removed.id, "todo deleted");
        Ok(())
    }

    async fn todos_by_category(&self, category: &str) -> Vec<Todo> {
        let state = self.inner.read().await;
        state.todos.iter().filter(|t| t.category == category).cloned().collect()
    }

    async fn list_categories(&self) -> Vec<String> {
        let state = self.inner.read().await;
        state.categories.iter().map(|c| c.name.clone()).collect()
    }

    async fn create_category(&self, input: NewCategory) -> Result<Category, ServiceError> {
        let name = non_empty(input.name).ok_or_else(|| ServiceError::validation("Category name is required"))?;
        let mut state = self.inner.write().await;
        if state.category_index(&name).is_some() {
            return Err(ServiceError::conflict("Category already exists"));
        }
        let category = Category { name };
        state.categories.push(category.clone());
        info!(event = "category_created", name = %category.name, "category created");
        Ok(category)
    }

    async fn rename_category(&self, name: &str, input: CategoryRename) -> Result<Category, ServiceError> {
        let mut guard = self.inner.write().await;
        let state = &mut *guard;
        let idx = state.category_index(name).ok_or_else(|| ServiceError::not_found("Category"))?;
        let new_name = non_empty(input.new_name)
            .ok_or_else(|| ServiceError::validation("New category name is required"))?;
        if new_name == name {
            warn!(event = "category_rename_noop", name = %name, "rename to the same name leaves the category unchanged");
            return Ok(state.categories[idx].clone());
        }

        if state.category_index(&new_name).is_some() {
            match self.rename_policy {
                RenamePolicy::Reject => return Err(ServiceError::conflict("Category already exists")),
                // the target record already carries the new name
                RenamePolicy::Overwrite => {
                    state.categories.remove(idx);
                }
            }
        } else {
            state.categories[idx].name = new_name.clone();
        }

        let mut moved = 0usize;
        for todo in state.todos.iter_mut().filter(|t| t.category == name) {
            todo.category = new_name.clone();
            moved += 1;
        }
        info!(event = "category_renamed", from = %name, to = %new_name, todos_updated = moved, "category renamed");
        Ok(Category { name: new_name })
    }

    async fn delete_category(&self, name: &str) -> Result<usize, ServiceError> {
        let mut guard = self.inner.write().await;
        let state = &mut *guard;
        let idx = state.category_index(name).ok_or_else(|| ServiceError::not_found("Category"))?;
        let before = state.todos.len();
        state.todos.retain(|t| t.category != name);
        let removed = before - state.todos.len();
        state.categories.remove(idx);
        info!(event = "category_deleted", name = %name, todos_removed = removed, "category deleted");
        Ok(removed)
    }

    async fn stats(&self) -> StoreStats {
        let state = self.inner.read().await;
        StoreStats { todos: state.todos.len(), categories: state.categories.len() }
    }
}
