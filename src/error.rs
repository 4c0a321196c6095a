//! Error types shared by the store and both HTTP surfaces.
//!
//! [`StoreError`] is what the persistence layer reports; [`AppError`] is what a
//! handler turns it into before answering. Both listeners answer with plain
//! text bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures reported by a [`crate::domain::repositories::MappingRepository`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No mapping exists for the requested shortcode.
    #[error("not found")]
    NotFound,

    /// The insert was rejected by the primary-key constraint.
    #[error("shortcode {shortcode:?} is already taken")]
    DuplicateKey { shortcode: String },

    /// The database is unreachable, corrupted, or returned something undecodable.
    #[error(transparent)]
    Io(#[from] sqlx::Error),
}

/// Request-scoped error converted into an HTTP status with a plain text body.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed(message.into())
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(message)
            | AppError::NotFound(message)
            | AppError::MethodNotAllowed(message)
            | AppError::Internal(message) => message,
        };

        (status, message).into_response()
    }
}
