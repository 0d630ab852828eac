//! Client-side transport for submissions

use crate::submission::ContactSubmission;
use crate::validation::FieldViolation;
use crate::wire::{Acknowledgement, ContactResponse, CONTACT_PATH};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Default request timeout of [`HttpTransport`]
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The backend re-validated and refused the submission
    #[error("Submission rejected: {message}")]
    Rejected {
        message: String,
        violations: Vec<FieldViolation>,
    },

    /// Non-success status other than a validation failure
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// No response within the transport timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection or protocol failure
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The response body was not what the endpoint promises
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmitError::Timeout
        } else {
            SubmitError::Http(err)
        }
    }
}

/// Result type alias for submission attempts
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Sends a validated submission to the backend
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> SubmitResult<Acknowledgement>;
}

/// `reqwest` transport posting JSON to `<base>/api/contact`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> SubmitResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> SubmitResult<Acknowledgement> {
        tracing::debug!(endpoint = %self.endpoint, "sending contact submission");

        let response = self.client.post(&self.endpoint).json(submission).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Option<ContactResponse> = serde_json::from_slice(&bytes).ok();

        match (status, body) {
            (s, Some(body)) if s.is_success() && body.success => Ok(Acknowledgement {
                message: body.message,
            }),
            (s, None) if s.is_success() => Err(SubmitError::Decode(format!(
                "unexpected body for status {}",
                s.as_u16()
            ))),
            (StatusCode::BAD_REQUEST, Some(body)) => Err(SubmitError::Rejected {
                message: body.message,
                violations: body.errors.unwrap_or_default(),
            }),
            (s, body) => Err(SubmitError::Server {
                status: s.as_u16(),
                message: body.map(|b| b.message).unwrap_or_else(|| {
                    s.canonical_reason().unwrap_or("unknown status").to_string()
                }),
            }),
        }
    }
}
