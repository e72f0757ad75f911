use crate::api::payload::ApiMessage;
use crate::order_actor::OrderError;
use crate::table_actor::TableError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// Errors returned by handlers.
///
/// | Variant | Status |
/// |---------|--------|
/// | `Validation` | 400 |
/// | `Conflict` | 200, `success: false` |
/// | `NotFound` | 404 |
/// | `Internal` | 500, details logged only |
///
/// `Conflict` is an expected outcome ("table already locked") and is answered
/// with 200 so clients branch on `success`, not on the status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::OK, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiMessage::failure(message))).into_response()
    }
}

impl From<TableError> for AppError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::TableRequired => AppError::Validation(e.to_string()),
            TableError::ActorCommunicationError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => AppError::NotFound("Order not found".to_string()),
            OrderError::ActorCommunicationError(msg) => AppError::Internal(msg),
        }
    }
}
