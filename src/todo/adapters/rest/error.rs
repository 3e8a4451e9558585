//! Error-to-response mapping for the todo HTTP API.

use crate::todo::services::TodoLifecycleError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error body returned for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub status_code: u16,
    /// Human-readable failure description.
    pub message: String,
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed structural validation.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    /// The lifecycle service rejected the operation.
    #[error(transparent)]
    Lifecycle(#[from] TodoLifecycleError),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::Lifecycle(TodoLifecycleError::Domain(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Lifecycle(TodoLifecycleError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Lifecycle(TodoLifecycleError::Repository(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Storage failures are logged server-side and not echoed to clients.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "todo request failed");
            "internal server error".to_owned()
        } else {
            self.to_string()
        };
        let body = ErrorBody {
            status_code: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
