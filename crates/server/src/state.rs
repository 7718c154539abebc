use std::sync::Arc;

use configs::RenamePolicy;
use service::todos::{MemoryTodoStore, TodoRepository};

/// Router state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoRepository>) -> Self {
        Self { store }
    }

    /// Fresh, empty in-memory store.
    pub fn in_memory(rename_policy: RenamePolicy) -> Self {
        let store: Arc<dyn TodoRepository> = MemoryTodoStore::new(rename_policy);
        Self::new(store)
    }
}
