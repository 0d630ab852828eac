//! CLI error types

use genesis_contact::SubmitError;
use genesis_nav::NavError;
use genesis_site::SiteError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API error response
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Contact submission failed
    #[error("Submission failed: {0}")]
    Submit(#[from] SubmitError),

    /// Navigation error
    #[error("Navigation error: {0}")]
    Nav(#[from] NavError),

    /// Site context or translation error
    #[error("Site error: {0}")]
    Site(#[from] SiteError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
