//! Service layer for the todo store.
//! - Domain records and request inputs live in `todos::domain`.
//! - `todos::repository` defines the storage seam; `todos::memory` is the in-process implementation.
//! - Category cascades (rename/delete) are applied atomically with the category change.

pub mod errors;
pub mod todos;
