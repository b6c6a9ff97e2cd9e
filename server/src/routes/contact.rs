//! Contact route — `POST /api/contact`.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::error::ErrorCode;
use crate::relay::types::RelayError;
use crate::services::contact::{ContactError, ContactSubmission};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ContactResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

/// Seconds a client should wait before resubmitting after a relay failure.
const RELAY_RETRY_AFTER_SECS: u64 = 30;

/// `POST /api/contact` — validate and relay one contact form submission.
///
/// Malformed bodies answer `400 E_INVALID_INPUT` in the same JSON shape as
/// every other outcome.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "contact submission body rejected");
            return error_response(&ContactError::InvalidInput("malformed request body"));
        }
    };

    match state.contact.submit(body).await {
        Ok(()) => (StatusCode::OK, Json(ContactResponse { ok: true, error: None })).into_response(),
        Err(e) => error_response(&e),
    }
}

fn error_response(err: &ContactError) -> Response {
    let status = contact_error_to_status(err);
    let body = Json(ContactResponse { ok: false, error: Some(err.error_code()) });
    match retry_after_secs(err) {
        Some(secs) => (status, [(header::RETRY_AFTER, secs.to_string())], body).into_response(),
        None => (status, body).into_response(),
    }
}

/// `Retry-After` value for errors a later resubmission could get past.
pub(crate) fn retry_after_secs(err: &ContactError) -> Option<u64> {
    if !err.retryable() {
        return None;
    }
    match err {
        ContactError::RateLimited(e) => Some(e.window_secs()),
        _ => Some(RELAY_RETRY_AFTER_SECS),
    }
}

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::Configuration | ContactError::Relay(RelayError::MissingConfig { .. }) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ContactError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ContactError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        ContactError::Relay(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
