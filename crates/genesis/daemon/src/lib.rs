//! AI Genesis daemon library
//!
//! This module provides the components of `genesisd`:
//! - REST API (`POST /api/contact`, `GET /api/health`)
//! - Submission sinks
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod sink;

pub use api::rest::state::AppState;
pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError, SinkError};
pub use server::Server;
pub use sink::{LoggingSink, ReceivedSubmission, SubmissionSink};
