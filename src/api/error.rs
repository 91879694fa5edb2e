//! Error Normalization
//!
//! Funnels every store failure through one place that decides the status code
//! and the response body, so no handler invents its own error shape.
//!
//! | Failure                  | Status | Body                              |
//! |--------------------------|--------|-----------------------------------|
//! | Draft validation         | 400    | `{"error": "content missing"}`    |
//! | Malformed identifier     | 400    | `{"error": "malformatted id"}`    |
//! | Record not found         | 404    | empty                             |
//! | Anything else            | 500    | `{"error": "internal server error"}` |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::protocol::ErrorBody;
use crate::store::StoreError;

/// Client-visible failure of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The draft failed validation; carries the message for the body.
    Validation(String),
    /// No record lives under the requested id.
    NotFound,
    /// The id does not have the shape the active backend expects.
    MalformedId,
    /// An internal fault; the cause is logged, the body stays generic.
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(rejection) => ApiError::Validation(rejection.message().to_string()),
            StoreError::NotFound => ApiError::NotFound,
            StoreError::MalformedId => ApiError::MalformedId,
            other => {
                tracing::error!("Store failure: {}", other);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => error_response(StatusCode::BAD_REQUEST, message),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::MalformedId => {
                error_response(StatusCode::BAD_REQUEST, "malformatted id".to_string())
            }
            ApiError::Internal => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        }
    }
}

/// Builds the `{"error": ...}` response used wherever a body is wanted.
fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}
