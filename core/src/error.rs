//! Error signal shared by every store backend.
//!
//! # Design
//! `NotFound` gets a dedicated variant because it is the one domain-level
//! outcome the transport layer renders specially (404). Everything a backend
//! can otherwise fail with lands in `Storage` with a message for logging.

use thiserror::Error;

/// Errors returned by `TodoStore` implementations and forwarded unchanged
/// by `TodoService`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No live record carries the requested identifier.
    #[error("todo with id {0} not found")]
    NotFound(String),

    /// The backing store failed. The in-memory store never produces this.
    #[error("storage error: {0}")]
    Storage(String),
}
