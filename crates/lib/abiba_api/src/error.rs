//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use abiba_core::logs::LogReadError;

use crate::models::ErrorResponse;

/// User-facing message for a failed completion call.
pub const CHAT_ERROR_MESSAGE: &str = "Internal synchronization error in Abiba Neuro-Core";

/// User-facing message for an unreadable log file.
pub const LOGS_ERROR_MESSAGE: &str = "Sync error";

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// The completion adapter failed. `details` is `None` when the
    /// deployment hides upstream error text.
    #[error("Upstream completion failed")]
    Upstream { details: Option<String> },

    #[error("Log read failed: {0}")]
    LogRead(#[from] LogReadError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::Upstream { details } => ErrorResponse {
                error: CHAT_ERROR_MESSAGE.to_string(),
                details,
            },
            AppError::LogRead(_) => ErrorResponse {
                error: LOGS_ERROR_MESSAGE.to_string(),
                details: None,
            },
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
