//! Error types for genesisd

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use genesis_contact::{ContactResponse, MethodNotAllowedBody, ValidationErrors};
use thiserror::Error;

/// Daemon-level errors
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for DaemonError {
    fn from(err: config::ConfigError) -> Self {
        DaemonError::Config(err.to_string())
    }
}

/// Failure reported by a submission sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink cannot take submissions right now
    #[error("Sink unavailable: {0}")]
    Unavailable(String),

    /// The sink rejected the record
    #[error("Sink write failed: {0}")]
    Write(String),
}

/// API-specific errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed parsing or validation
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// Method other than the one the route accepts
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Sink failure
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ContactResponse::invalid(errors))).into_response()
            }
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(MethodNotAllowedBody::default()),
            )
                .into_response(),
            other => {
                // Details stay in the log; clients get the generic body
                tracing::error!(error = %other, "contact request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ContactResponse::internal_error()),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;
