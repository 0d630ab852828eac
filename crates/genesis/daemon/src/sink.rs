//! Destinations for accepted contact submissions

use crate::error::SinkResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use genesis_contact::ContactSubmission;
use serde::Serialize;
use uuid::Uuid;

/// An accepted submission as recorded by the daemon
#[derive(Debug, Clone, Serialize)]
pub struct ReceivedSubmission {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub submission: ContactSubmission,
}

impl ReceivedSubmission {
    pub fn new(submission: ContactSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            submission,
        }
    }
}

/// Receives every submission that passed validation
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn accept(&self, record: &ReceivedSubmission) -> SinkResult<()>;
}

/// Default sink: one structured log line per submission
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

#[async_trait]
impl SubmissionSink for LoggingSink {
    async fn accept(&self, record: &ReceivedSubmission) -> SinkResult<()> {
        let submission = &record.submission;
        tracing::info!(
            id = %record.id,
            received_at = %record.received_at,
            name = submission.name(),
            email = submission.email(),
            project = %submission.project(),
            message_chars = submission.message().chars().count(),
            "contact form submission received"
        );
        Ok(())
    }
}
