//! Store trait and the in-memory backend.
//!
//! # Design
//! `MemoryStore` keeps records in a `Vec` behind a single `RwLock`, so
//! listing preserves insertion order and every read-modify-write sequence
//! (update, delete) is atomic with respect to concurrent requests.
//! Identifiers come from a monotonic counter starting at 0, rendered as
//! decimal strings; an id is never reused for the lifetime of the store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::types::Todo;

/// Storage backend for todo records.
///
/// The five operations are the whole contract; `TodoService` and the
/// transport layer never touch a backend through anything else.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All live records in insertion order. Empty if none exist.
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// The record with the matching id, or `NotFound`.
    async fn get(&self, id: &str) -> Result<Todo, StoreError>;

    /// Allocate the next id, append a new record, return it.
    async fn create(&self, title: String, completed: bool) -> Result<Todo, StoreError>;

    /// Replace title/completed on the matching record, id preserved.
    /// `NotFound` if no record matches.
    async fn update(&self, id: &str, title: String, completed: bool) -> Result<Todo, StoreError>;

    /// Remove the matching record. `NotFound` if no record matches.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// In-memory `TodoStore` backed by a `Vec` and an id counter.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.inner.read().await.todos.clone())
    }

    async fn get(&self, id: &str) -> Result<Todo, StoreError> {
        self.inner
            .read()
            .await
            .todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, title: String, completed: bool) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        let todo = Todo {
            id: inner.next_id.to_string(),
            title,
            completed,
        };
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: &str, title: String, completed: bool) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        todo.title = title;
        todo.completed = completed;
        Ok(todo.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        inner.todos.remove(index);
        Ok(())
    }
}
