//! Synchronous API client for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the client fully deterministic and
//! testable.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the todo-server crate; integration
//!   tests catch schema drift.
//! - `Filter` implements the all/active/done display filter, pure
//!   presentation logic over a fetched list with no server contract beyond
//!   List.

pub mod client;
pub mod error;
pub mod filter;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use filter::{remaining, Filter};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, TodoBody, TodoList, ToggleTodo};
