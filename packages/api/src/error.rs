//! # Application errors and how they reach the browser
//!
//! Every handler returns `Result<_, AppError>`. User-facing failures are rendered as
//! a `200 OK` plain-text body carrying the message, which is what the login and
//! registration forms have always shown. Backend failures are the exception: they
//! answer `500` with a generic message and the detail goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing. The message is shown as-is.
    #[error("{0}")]
    Validation(String),

    #[error("Registration failed. Email may already exist.")]
    DuplicateEmail,

    /// A lookup missed. The message is shown as-is.
    #[error("{0}")]
    NotFound(String),

    #[error("❌ Invalid password")]
    InvalidPassword,

    #[error("store failure: {0}")]
    Store(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => AppError::DuplicateEmail,
            StoreError::NotFound => AppError::NotFound("❌ Not found".to_string()),
            StoreError::Backend(msg) => AppError::Store(msg),
        }
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(e: tower_sessions::session::Error) -> Self {
        AppError::Store(format!("session: {}", e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store(detail) => {
                tracing::error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong. Please try again.",
                )
                    .into_response()
            }
            other => {
                tracing::debug!("Request rejected: {}", other);
                (StatusCode::OK, other.to_string()).into_response()
            }
        }
    }
}
