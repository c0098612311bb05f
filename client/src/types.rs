//! Wire DTOs for the todo API.
//!
//! # Design
//! These types mirror the todo-server schema but are defined independently,
//! keeping the client free of server-side dependencies. Integration tests
//! catch any schema drift between the two crates. Responses arrive wrapped
//! in envelopes (`{"todos": ...}` / `{"todo": ...}`); the parse methods
//! unwrap them so callers only ever see `Todo` values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub done: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new todo. The server trims the text and
/// rejects it with a validation error when nothing remains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Request payload for setting a todo's done flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTodo {
    pub done: bool,
}

/// Response envelope for the list operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

/// Response envelope for single-todo operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoBody {
    pub todo: Todo,
}
