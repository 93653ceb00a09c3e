//! Mapping from the domain error signal to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use todo_core::StoreError;

/// Transport-layer wrapper over `StoreError`.
///
/// Handlers return `Result<_, ApiError>` and propagate store failures with
/// `?`; the conversion here is the only place status codes are decided.
#[derive(Debug)]
pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            err @ StoreError::NotFound(_) => {
                (StatusCode::NOT_FOUND, err.to_string()).into_response()
            }
            StoreError::Storage(message) => {
                // Backend detail goes to the log, not to the client.
                tracing::error!(error = %message, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
