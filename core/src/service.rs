//! Service layer between transport handlers and the store.
//!
//! # Design
//! `TodoService` adds no business logic: it forwards arguments and results
//! unchanged. It exists so the transport crate depends on one injected type
//! rather than on a concrete backend, and so a different backend can be
//! swapped in at composition time without touching the handlers.

use std::sync::Arc;

use crate::error::StoreError;
use crate::store::TodoStore;
use crate::types::Todo;

/// Pass-through adapter over an injected `TodoStore`.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        self.store.list_all().await
    }

    pub async fn get(&self, id: &str) -> Result<Todo, StoreError> {
        self.store.get(id).await
    }

    pub async fn create(&self, title: String, completed: bool) -> Result<Todo, StoreError> {
        self.store.create(title, completed).await
    }

    pub async fn update(
        &self,
        id: &str,
        title: String,
        completed: bool,
    ) -> Result<Todo, StoreError> {
        self.store.update(id, title, completed).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(id).await
    }
}
