//! Contact form handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use crate::sink::ReceivedSubmission;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use genesis_contact::{
    parse_body, ContactResponse, FieldViolation, ValidationErrors, ViolationCode, SUCCESS_MESSAGE,
};

pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body is too large";

/// Accept a contact submission
///
/// The body is read raw so malformed JSON is reported in the same
/// violation format as schema failures. The acknowledgement delay runs
/// before the sink sees the record: a request cut short by the timeout
/// has not been accepted.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let body = body.map_err(body_rejection)?;

    let submission = parse_body(&body).map_err(|errors| {
        tracing::debug!(violations = errors.len(), "contact submission rejected");
        ApiError::Validation(errors)
    })?;

    if !state.ack_delay.is_zero() {
        tokio::time::sleep(state.ack_delay).await;
    }

    let record = ReceivedSubmission::new(submission);
    state.sink.accept(&record).await?;

    Ok(Json(ContactResponse::accepted(SUCCESS_MESSAGE)))
}

fn body_rejection(rejection: BytesRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::debug!("contact body over the size limit");
        ApiError::Validation(ValidationErrors::new(vec![FieldViolation::body(
            ViolationCode::TooBig,
            BODY_TOO_LARGE_MESSAGE,
        )]))
    } else {
        ApiError::Internal(rejection.body_text())
    }
}

/// Any method other than POST on the contact path
pub async fn contact_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
