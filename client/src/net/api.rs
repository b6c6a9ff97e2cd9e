//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submissions only
//! happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The server answers failed submissions with `{"ok":false,"error":"<code>"}`.
//! Only `E_NOT_CONFIGURED` is distinguished; every other failure collapses
//! into `SubmitError::Relay`, which the UI shows the same way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::contact::ContactFormInput;
use crate::util::contact_flow::ContactRelay;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

const NOT_CONFIGURED_CODE: &str = "E_NOT_CONFIGURED";

/// Why a contact submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The server has no relay configuration; nothing was sent.
    #[error("contact relay is not configured")]
    Configuration,
    /// The request or the relay call failed.
    #[error("contact submission failed: {0}")]
    Relay(String),
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_error_from_response(status: u16, body: &str) -> SubmitError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if parsed.error == NOT_CONFIGURED_CODE => SubmitError::Configuration,
        Ok(parsed) => SubmitError::Relay(format!("{} ({status})", parsed.error)),
        Err(_) => SubmitError::Relay(format!("contact request failed: {status}")),
    }
}

/// Post the form to `POST /api/contact`.
///
/// # Errors
///
/// Returns `SubmitError::Configuration` when the server reports the relay is
/// not configured, and `SubmitError::Relay` for any other failure.
pub async fn send_contact(form: &ContactFormInput) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(form)
            .map_err(|e| SubmitError::Relay(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Relay(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(submit_error_from_response(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(SubmitError::Relay("not available on server".to_owned()))
    }
}

/// Relay backed by the site's own contact endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiRelay;

impl ContactRelay for ApiRelay {
    async fn send(&self, form: &ContactFormInput) -> Result<(), SubmitError> {
        send_contact(form).await
    }
}
