//! Client-side contact form state machine
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle            (field errors shown)
//!                    -> Submitting -> Success -> Idle (form reset)
//!                                  -> Error   -> Idle (error shown)
//! ```
//!
//! Only one submission may be in flight; while it is, the submit control
//! is disabled and further attempts return [`FormOutcome::Busy`] without
//! touching the network.

use crate::submission::{ContactInput, Field};
use crate::transport::{SubmitError, SubmitTransport};
use crate::validation::{validate, ValidationErrors};
use crate::wire::Acknowledgement;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Current phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Toast shown after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Translation key of the title
    pub title_key: String,
    /// Translation key of the description
    pub description_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Failure,
}

impl Notification {
    pub fn sent() -> Self {
        Self {
            kind: NotificationKind::Success,
            title_key: "contact.toast.successTitle".to_string(),
            description_key: "contact.toast.successDescription".to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            kind: NotificationKind::Failure,
            title_key: "contact.toast.errorTitle".to_string(),
            description_key: "contact.toast.errorDescription".to_string(),
        }
    }
}

/// Result of one call to [`ContactForm::submit`]
#[derive(Debug)]
pub enum FormOutcome {
    /// Client-side validation failed; nothing was sent
    Invalid(ValidationErrors),
    /// Accepted by the backend; the form was reset
    Sent(Acknowledgement),
    /// The attempt failed; input is kept for a manual retry
    Failed(SubmitError),
    /// Another submission is still in flight
    Busy,
}

#[derive(Debug, Default)]
struct FormInner {
    input: ContactInput,
    phase: FormPhase,
    errors: Option<ValidationErrors>,
    notification: Option<Notification>,
}

/// Contact form shared between the view and the submit task
#[derive(Debug, Default)]
pub struct ContactForm {
    inner: Mutex<FormInner>,
    in_flight: AtomicBool,
}

/// Returns the form to idle even if the submit future is dropped
///
/// Must be dropped while no lock on `inner` is held.
struct InFlight<'a>(&'a ContactForm);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.inner.lock().phase = FormPhase::Idle;
        self.0.in_flight.store(false, Ordering::Release);
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: ContactInput) -> Self {
        Self {
            inner: Mutex::new(FormInner {
                input,
                ..Default::default()
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Input-change event
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.inner.lock().input.set(field, value);
    }

    pub fn input(&self) -> ContactInput {
        self.inner.lock().input.clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.inner.lock().phase
    }

    /// Field errors from the last failed validation
    pub fn errors(&self) -> Option<ValidationErrors> {
        self.inner.lock().errors.clone()
    }

    pub fn error_for(&self, field: Field) -> Option<String> {
        self.inner
            .lock()
            .errors
            .as_ref()
            .and_then(|e| e.message_for(field))
            .map(str::to_string)
    }

    /// Take the pending toast, if any
    pub fn take_notification(&self) -> Option<Notification> {
        self.inner.lock().notification.take()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.in_flight.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.input = ContactInput::default();
        inner.errors = None;
    }

    /// Validate and, if valid, send the current input through `transport`
    pub async fn submit(&self, transport: &dyn SubmitTransport) -> FormOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("submit ignored, a submission is already pending");
            return FormOutcome::Busy;
        }
        let _guard = InFlight(self);

        let input = {
            let mut inner = self.inner.lock();
            inner.phase = FormPhase::Validating;
            inner.input.clone()
        };

        let submission = match validate(&input) {
            Ok(submission) => submission,
            Err(errors) => {
                let mut inner = self.inner.lock();
                inner.errors = Some(errors.clone());
                inner.phase = FormPhase::Idle;
                return FormOutcome::Invalid(errors);
            }
        };

        {
            let mut inner = self.inner.lock();
            inner.errors = None;
            inner.phase = FormPhase::Submitting;
        }

        let result = transport.send(&submission).await;

        let mut inner = self.inner.lock();
        inner.phase = FormPhase::Idle;
        match result {
            Ok(ack) => {
                inner.input = ContactInput::default();
                inner.notification = Some(Notification::sent());
                FormOutcome::Sent(ack)
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                if let SubmitError::Rejected { violations, .. } = &err {
                    inner.errors = Some(ValidationErrors::new(violations.clone()));
                }
                inner.notification = Some(Notification::failed());
                FormOutcome::Failed(err)
            }
        }
    }
}
