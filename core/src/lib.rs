//! Domain core for the todo service.
//!
//! # Overview
//! Owns everything below the HTTP layer: the `Todo` record, the `StoreError`
//! signal, the `TodoStore` trait with its in-memory implementation, and the
//! `TodoService` adapter the transport layer talks to.
//!
//! # Design
//! - Layers compose through constructors: the service holds an
//!   `Arc<dyn TodoStore>`, the server crate holds a `TodoService`.
//! - "Not found" travels as `StoreError::NotFound` through every layer;
//!   the transport crate decides how to render it.
//! - The store trait is async so backends that do real I/O (see the
//!   `todo-sqlite` crate) satisfy the same interface as the in-memory one.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use service::TodoService;
pub use store::{MemoryStore, TodoStore};
pub use types::Todo;
