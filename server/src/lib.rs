//! File-backed todo service.
//!
//! # Overview
//! A minimal task-list server: the browser client (or the `todo-client`
//! crate) issues create/toggle/delete operations against `/api/todos`, and
//! the server persists the full collection to a single JSON document on
//! disk. Every other path serves the static client entry page.
//!
//! # Design
//! - Persistence is behind the `Store` trait; the router takes a
//!   `SharedStore`, so tests run against `MemoryStore` and production runs
//!   against `FileStore` without touching the handlers.
//! - The document is loaded in full and rewritten in full on every
//!   mutation. A single async mutex serializes the load-mutate-save cycle.
//! - `app` and `run` are public so integration tests can drive a real
//!   server on an arbitrary listener.

pub mod api;
pub mod error;
pub mod store;
pub mod types;

use std::io;
use std::path::Path;

use axum::routing::{get, patch};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

pub use error::ApiError;
pub use store::{shared, FileStore, MemoryStore, SharedStore, Store, StoreError};
pub use types::{CreateTodo, Document, Todo, TodoBody, TodoList, ToggleTodo};

/// Build the application router: the JSON API plus a static-asset fallback
/// that serves `index.html` from `static_dir` for unknown paths.
pub fn app(store: SharedStore, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let assets =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/todos", get(api::list_todos).post(api::create_todo))
        .route(
            "/api/todos/{id}",
            patch(api::toggle_todo).delete(api::delete_todo),
        )
        .fallback_service(assets)
        .with_state(store)
}

/// Serve the application on `listener` until the task is dropped.
pub async fn run(
    listener: TcpListener,
    store: SharedStore,
    static_dir: impl AsRef<Path>,
) -> Result<(), io::Error> {
    axum::serve(listener, app(store, static_dir)).await
}
