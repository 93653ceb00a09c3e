//! SQLite-backed `TodoStore`.
//!
//! # Overview
//! The embedded-database counterpart to `todo_core::MemoryStore`: same five
//! operations, same error signal, records survive process restarts when
//! opened on a file path.
//!
//! # Design
//! - One `rusqlite::Connection` behind a `Mutex`; every operation takes the
//!   lock for its whole read-modify-write sequence.
//! - Identifiers use the same monotonic-counter strategy as the in-memory
//!   store. The counter is seeded from `MAX(id) + 1` on open, so a reopened
//!   store keeps allocating past every persisted id.
//! - rusqlite failures map to `StoreError::Storage`; only a missing row maps
//!   to `StoreError::NotFound`.

use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use todo_core::{StoreError, Todo, TodoStore};

/// SQLite-backed implementation of the `TodoStore` trait.
pub struct SqliteTodoStore {
    conn: Mutex<Connection>,
    next_id: AtomicI64,
}

impl SqliteTodoStore {
    /// Open (or create) a database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Storage(format!("open: {e}")))?;
        Self::init_with_connection(conn)
    }

    /// Create an in-memory database. Used by tests; contents are lost when
    /// the store is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Storage(format!("open_in_memory: {e}")))?;
        Self::init_with_connection(conn)
    }

    fn init_with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            );
            ",
        )
        .map_err(|e| StoreError::Storage(format!("init_schema: {e}")))?;

        let max_id: Option<i64> = conn
            .query_row("SELECT MAX(id) FROM todos", [], |row| row.get(0))
            .map_err(|e| StoreError::Storage(format!("seed_counter: {e}")))?;

        Ok(Self {
            conn: Mutex::new(conn),
            next_id: AtomicI64::new(max_id.map_or(0, |max| max + 1)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Storage("connection mutex poisoned".to_string()))
    }
}

/// Parse an id into its stored integer form.
///
/// Returns `None` for anything that is not the canonical decimal rendering
/// of a stored id ("007", "+1", "abc"), which by construction cannot name a
/// record.
fn parse_id(id: &str) -> Option<i64> {
    let n: i64 = id.parse().ok()?;
    if n.to_string() == id {
        Some(n)
    } else {
        None
    }
}

fn storage_err(e: rusqlite::Error) -> StoreError {
    StoreError::Storage(e.to_string())
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT id, title, completed FROM todos ORDER BY id")
            .map_err(storage_err)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Todo {
                    id: row.get::<_, i64>(0)?.to_string(),
                    title: row.get(1)?,
                    completed: row.get(2)?,
                })
            })
            .map_err(storage_err)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(storage_err)
    }

    async fn get(&self, id: &str) -> Result<Todo, StoreError> {
        let key = match parse_id(id) {
            Some(key) => key,
            None => return Err(StoreError::NotFound(id.to_string())),
        };

        self.conn()?
            .query_row(
                "SELECT title, completed FROM todos WHERE id = ?1",
                params![key],
                |row| {
                    Ok(Todo {
                        id: id.to_string(),
                        title: row.get(0)?,
                        completed: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(storage_err)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, title: String, completed: bool) -> Result<Todo, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.conn()?
            .execute(
                "INSERT INTO todos (id, title, completed) VALUES (?1, ?2, ?3)",
                params![id, title, completed],
            )
            .map_err(storage_err)?;

        Ok(Todo {
            id: id.to_string(),
            title,
            completed,
        })
    }

    async fn update(&self, id: &str, title: String, completed: bool) -> Result<Todo, StoreError> {
        let key = match parse_id(id) {
            Some(key) => key,
            None => return Err(StoreError::NotFound(id.to_string())),
        };

        let changed = self
            .conn()?
            .execute(
                "UPDATE todos SET title = ?1, completed = ?2 WHERE id = ?3",
                params![title, completed, key],
            )
            .map_err(storage_err)?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(Todo {
            id: id.to_string(),
            title,
            completed,
        })
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let key = match parse_id(id) {
            Some(key) => key,
            None => return Err(StoreError::NotFound(id.to_string())),
        };

        let removed = self
            .conn()?
            .execute("DELETE FROM todos WHERE id = ?1", params![key])
            .map_err(storage_err)?;
        if removed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
