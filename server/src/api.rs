//! HTTP handlers for the todo CRUD surface.
//!
//! Every mutation is a load-mutate-save cycle performed while holding the
//! store mutex, so concurrent requests are serialized rather than racing on
//! the underlying document.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::error::ApiError;
use crate::store::SharedStore;
use crate::types::{CreateTodo, Todo, TodoBody, TodoList, ToggleTodo};

pub async fn list_todos(State(store): State<SharedStore>) -> Result<Json<TodoList>, ApiError> {
    let store = store.lock().await;
    let todos = store.load()?;
    Ok(Json(TodoList { todos }))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<TodoBody>), ApiError> {
    let text = input.text.trim();
    if text.is_empty() {
        return Err(ApiError::TextRequired);
    }

    let store = store.lock().await;
    let mut todos = store.load()?;
    let todo = Todo::new(text);
    todos.insert(0, todo.clone());
    store.save(&todos)?;

    debug!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(TodoBody { todo })))
}

pub async fn toggle_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(input): Json<ToggleTodo>,
) -> Result<Json<TodoBody>, ApiError> {
    let store = store.lock().await;
    let mut todos = store.load()?;

    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(ApiError::TodoNotFound)?;
    todo.done = input.done;
    let todo = todo.clone();
    store.save(&todos)?;

    debug!(id = %todo.id, done = todo.done, "toggled todo");
    Ok(Json(TodoBody { todo }))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = store.lock().await;
    let mut todos = store.load()?;

    let before = todos.len();
    todos.retain(|t| t.id != id);
    if todos.len() == before {
        return Err(ApiError::TodoNotFound);
    }
    store.save(&todos)?;

    debug!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
