use std::sync::Arc;

use crate::error::ServiceError;
use crate::models::Todo;
use crate::repository::TodoRepository;

/// Todo operations over an injected repository
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    /// Store a new todo; the repository assigns its id.
    pub async fn create_todo(&self, todo: Todo) -> Result<Todo, ServiceError> {
        let created = self.repo.save(todo).await?;
        tracing::info!("Created todo with id: {}", created.id.as_deref().unwrap_or_default());
        Ok(created)
    }

    /// Replace `text` and `done` of an existing todo, keeping `id`.
    pub async fn update_todo(&self, id: &str, mut todo: Todo) -> Result<Todo, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }

        todo.id = Some(id.to_string());
        let updated = self.repo.save(todo).await?;
        tracing::info!("Updated todo with id: {}", id);
        Ok(updated)
    }

    pub async fn delete_todo(&self, id: &str) -> Result<(), ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }

        self.repo.delete_by_id(id).await?;
        tracing::info!("Deleted todo with id: {}", id);
        Ok(())
    }
}
