//! Domain types and wire DTOs for the todo service.
//!
//! # Design
//! `Todo` and `Document` are both the in-memory representation and the
//! persisted JSON shape; the store serializes them directly, so there is no
//! separate storage schema to keep in sync. Request DTOs default missing
//! fields (`text` to empty, `done` to false) so the HTTP surface tolerates
//! sparse bodies the way the reference browser client sends them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub done: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Mint a new todo: fresh id, `done = false`, creation time now.
    ///
    /// Ids are ULIDs rendered as their canonical 26-character string: a
    /// millisecond timestamp plus random component, unique with negligible
    /// collision probability at the volumes this service targets, and safe
    /// to use verbatim as a URL path segment.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            text: text.into(),
            done: false,
            created_at: Utc::now(),
        }
    }
}

/// The persisted aggregate: every todo, newest first.
///
/// Loaded in full and rewritten in full on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub todos: Vec<Todo>,
}

/// Request payload for creating a todo. A missing `text` field behaves like
/// an empty string and is rejected by validation, not by deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: String,
}

/// Request payload for toggling a todo's done flag. A missing `done` field
/// behaves like `false`.
#[derive(Debug, Deserialize)]
pub struct ToggleTodo {
    #[serde(default)]
    pub done: bool,
}

/// Response envelope for the list operation: `{"todos": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

/// Response envelope for single-todo operations: `{"todo": {...}}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoBody {
    pub todo: Todo,
}
