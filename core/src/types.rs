//! The todo record.

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// `id` is assigned by the store on creation and never changes afterwards;
/// `title` and `completed` are replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}
