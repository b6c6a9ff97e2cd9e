//! `EmailJS` REST client.
//!
//! Thin HTTP wrapper for `POST /api/v1.0/email/send`. Request building is a
//! pure function so the wire shape can be tested without a network.

use std::time::Duration;

use serde::Serialize;

use super::config::{RelayConfig, RelayTimeouts};
use super::types::{ContactForm, RelayError};

const SEND_PATH: &str = "/api/v1.0/email/send";

// =============================================================================
// CLIENT
// =============================================================================

pub struct EmailJsRelay {
    http: reqwest::Client,
}

impl EmailJsRelay {
    /// Build the HTTP client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::HttpClientBuild` if the TLS backend fails to initialise.
    pub fn new(timeouts: RelayTimeouts) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }

    pub async fn send(&self, config: &RelayConfig, form: &ContactForm) -> Result<(), RelayError> {
        let body = build_request(config, form);

        let response = self
            .http
            .post(send_url(config))
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 200 {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(RelayError::Response { status, body: text })
    }
}

#[async_trait::async_trait]
impl super::ContactRelay for EmailJsRelay {
    async fn send_form(&self, config: &RelayConfig, form: &ContactForm) -> Result<(), RelayError> {
        self.send(config, form).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct ApiRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactForm,
}

pub(crate) fn build_request<'a>(config: &'a RelayConfig, form: &'a ContactForm) -> ApiRequest<'a> {
    ApiRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        access_token: config.private_key.as_deref(),
        template_params: form,
    }
}

pub(crate) fn send_url(config: &RelayConfig) -> String {
    format!("{}{SEND_PATH}", config.api_url)
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;
