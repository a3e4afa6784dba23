//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use crate::state::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can surface from a request handler are represented by this
/// enum. Each variant implements automatic conversion to an HTTP response via
/// `IntoResponse`; the `Display` string becomes the response's `detail` field.
#[derive(Error, Debug)]
pub enum AppError {
    /// No activity exists under the requested name
    #[error("Activity not found")]
    ActivityNotFound,

    /// The student is already on the activity's participant list
    #[error("Student already signed up for this activity")]
    AlreadyRegistered,

    /// The student is not on the activity's participant list
    #[error("Student is not registered for this activity")]
    NotRegistered,

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownActivity(_) => AppError::ActivityNotFound,
            RegistryError::DuplicateSignup { .. } => AppError::AlreadyRegistered,
            RegistryError::NotRegistered { .. } => AppError::NotRegistered,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::ActivityNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::AlreadyRegistered => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotRegistered => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "detail": detail,
        }));

        (status, body).into_response()
    }
}
