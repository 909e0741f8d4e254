use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{TodoRepository, assign_id};
use crate::models::Todo;

/// Process-local repository; lists todos in insertion order
#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<IndexMap<String, Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>> {
        Ok(self.todos.read().await.get(id).cloned())
    }

    async fn save(&self, mut todo: Todo) -> Result<Todo> {
        let id = assign_id(&todo);
        todo.id = Some(id.clone());
        self.todos.write().await.insert(id.clone(), todo.clone());
        tracing::debug!("Saved todo with id: {}", id);
        Ok(todo)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.todos.write().await.shift_remove(id);
        tracing::debug!("Deleted todo with id: {}", id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.todos.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: Option<&str>, text: &str) -> Todo {
        Todo {
            id: id.map(str::to_string),
            text: text.to_string(),
            done: false,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let repo = InMemoryTodoRepository::new();

        let saved = repo.save(todo(None, "Buy milk")).await.unwrap();

        let id = saved.id.clone().unwrap();
        assert!(!id.is_empty());
        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_save_with_id_upserts() {
        let repo = InMemoryTodoRepository::new();
        repo.save(todo(Some("123"), "Buy milk")).await.unwrap();

        let updated = repo.save(todo(Some("123"), "Buy snacks")).await.unwrap();

        assert_eq!(updated.id.as_deref(), Some("123"));
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "Buy snacks");
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryTodoRepository::new();
        for text in ["first", "second", "third"] {
            repo.save(todo(None, text)).await.unwrap();
        }

        let first = repo.find_all().await.unwrap()[0].id.clone().unwrap();
        repo.delete_by_id(&first).await.unwrap();

        let texts: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["second", "third"]);
    }

    #[tokio::test]
    async fn test_find_missing_and_delete_missing() {
        let repo = InMemoryTodoRepository::new();

        assert_eq!(repo.find_by_id("nope").await.unwrap(), None);
        assert!(repo.delete_by_id("nope").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_all() {
        let repo = InMemoryTodoRepository::new();
        repo.save(todo(None, "a")).await.unwrap();
        repo.save(todo(None, "b")).await.unwrap();

        repo.delete_all().await.unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
