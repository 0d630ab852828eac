//! Contact submission pipeline for AI Genesis
//!
//! One [`ContactSubmission`] travels from the form to the backend and is
//! validated on both sides with the same rules:
//!
//! - **validation**: [`validate`] turns raw [`ContactInput`] into a normalized
//!   submission or a list of [`FieldViolation`]s. The server entry point
//!   [`parse_body`] applies the same rules to an untrusted JSON body.
//! - **wire**: response bodies of `POST /api/contact`.
//! - **transport**: [`SubmitTransport`] and its `reqwest` implementation.
//! - **form**: [`ContactForm`], the client-side state machine with its
//!   one-submission-at-a-time guard.

#![deny(unsafe_code)]

mod form;
mod project;
mod submission;
mod transport;
mod validation;
mod wire;

pub use form::*;
pub use project::*;
pub use submission::*;
pub use transport::*;
pub use validation::*;
pub use wire::*;
