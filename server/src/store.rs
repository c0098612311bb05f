//! Durable persistence for the todo document.
//!
//! # Design
//! `Store` is the injectable persistence boundary: handlers only ever see
//! `load` and `save` over the full document, so a transactional backend
//! could replace `FileStore` without touching the API layer. The shared
//! handle wraps the store in one async mutex held across the whole
//! load-mutate-save cycle, which serializes writers within the process.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;

use crate::types::{Document, Todo};

/// Failures the store can surface. Malformed persisted content is not one
/// of them; that loads as an empty document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo document I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("todo document could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence boundary for the todo document.
///
/// The document is loaded in full and rewritten in full on every mutation;
/// implementations need no partial updates and no indexing.
pub trait Store: Send {
    /// Read the full document, default-initializing it when absent.
    fn load(&self) -> Result<Vec<Todo>, StoreError>;

    /// Overwrite the persisted document with `todos`.
    fn save(&self, todos: &[Todo]) -> Result<(), StoreError>;
}

/// Handle shared by all request handlers.
///
/// The mutex is held across load-mutate-save, so concurrent requests cannot
/// interleave and drop each other's writes.
pub type SharedStore = Arc<Mutex<Box<dyn Store>>>;

/// Wrap a store in the shared handle the router expects.
pub fn shared<S: Store + 'static>(store: S) -> SharedStore {
    Arc::new(Mutex::new(Box::new(store)))
}

/// File-backed store: one pretty-printed JSON document on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the parent directory and an empty document if either is
    /// missing.
    fn ensure_file(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        if !self.path.exists() {
            fs::write(&self.path, serde_json::to_string_pretty(&Document::default())?)?;
        }
        Ok(())
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Vec<Todo>, StoreError> {
        self.ensure_file()?;
        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Document>(&raw) {
            Ok(doc) => Ok(doc.todos),
            Err(e) => {
                // Malformed persisted state is "no data", not a fatal error.
                warn!(
                    "todo document at {} is malformed ({e}); treating as empty",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, todos: &[Todo]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let doc = Document { todos: todos.to_vec() };
        fs::write(&self.path, serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    todos: std::sync::Mutex<Vec<Todo>>,
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.lock().unwrap().clone())
    }

    fn save(&self, todos: &[Todo]) -> Result<(), StoreError> {
        *self.todos.lock().unwrap() = todos.to_vec();
        Ok(())
    }
}
