//! Error taxonomy for the HTTP API.
//!
//! The two expected failures, bad input and unknown id, map to 400 and 404
//! with `{"error": "<message>"}` bodies. Store failures (disk full,
//! permissions) are the only 500s the service produces; there is no retry
//! policy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Create was called with empty or whitespace-only text.
    #[error("text is required")]
    TextRequired,

    /// No todo matches the requested id.
    #[error("todo not found")]
    TodoNotFound,

    /// The store failed outright.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::TextRequired => StatusCode::BAD_REQUEST,
            ApiError::TodoNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(e) => {
                error!("store failure: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
