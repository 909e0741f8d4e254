use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Todo;

pub mod memory;
pub mod spanner;

pub use memory::InMemoryTodoRepository;
pub use spanner::SpannerTodoRepository;

/// Persistent store of todos keyed by id
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Todo>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>>;

    /// Insert or update a todo, assigning a fresh id when it has none.
    ///
    /// Returns the stored entity, which always carries an id.
    async fn save(&self, todo: Todo) -> Result<Todo>;

    async fn delete_by_id(&self, id: &str) -> Result<()>;

    async fn delete_all(&self) -> Result<()>;
}

/// Id a todo is stored under: its own if set and non-empty, otherwise a new UUID.
pub(crate) fn assign_id(todo: &Todo) -> String {
    match todo.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}
