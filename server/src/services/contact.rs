//! Contact submission service.
//!
//! Validates a submission, applies rate limits and forwards it to the relay.
//! The relay configuration is checked at startup and held here as an
//! `Option`; when it is absent every submission fails with
//! `ContactError::Configuration` before any network call.

use std::sync::Arc;

use serde::Deserialize;

use crate::error::ErrorCode;
use crate::rate_limit::{RateLimitError, RateLimiter};
use crate::relay::ContactRelay;
use crate::relay::config::RelayConfig;
use crate::relay::types::{ContactForm, RelayError};

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact relay is not configured")]
    Configuration,
    #[error("invalid submission: {0}")]
    InvalidInput(&'static str),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ErrorCode for ContactError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration => "E_NOT_CONFIGURED",
            Self::InvalidInput(_) => "E_INVALID_INPUT",
            Self::RateLimited(_) => "E_RATE_LIMITED",
            Self::Relay(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) => true,
            Self::Relay(e) => e.retryable(),
            Self::Configuration | Self::InvalidInput(_) => false,
        }
    }
}

/// Raw request body of `POST /api/contact`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// Trim every field and reject blanks or an implausible email.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidInput` naming the first offending field.
    pub fn validate(self) -> Result<ContactForm, ContactError> {
        let name = self.name.trim().to_owned();
        let email = self.email.trim().to_owned();
        let message = self.message.trim().to_owned();

        if name.is_empty() {
            return Err(ContactError::InvalidInput("name is required"));
        }
        if !looks_like_email(&email) {
            return Err(ContactError::InvalidInput("email is invalid"));
        }
        if message.is_empty() {
            return Err(ContactError::InvalidInput("message is required"));
        }
        Ok(ContactForm { name, email, message })
    }
}

#[must_use]
pub fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

pub struct ContactService {
    config: Option<RelayConfig>,
    relay: Arc<dyn ContactRelay>,
    limiter: RateLimiter,
}

impl ContactService {
    #[must_use]
    pub fn new(config: Option<RelayConfig>, relay: Arc<dyn ContactRelay>, limiter: RateLimiter) -> Self {
        Self { config, relay, limiter }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Deliver one submission.
    ///
    /// # Errors
    ///
    /// Fails with `Configuration` when no relay config was loaded at startup,
    /// `InvalidInput` for blank or malformed fields, `RateLimited` when the
    /// sender or the site is over its window, and `Relay` when delivery fails.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactError> {
        let Some(config) = &self.config else {
            tracing::error!("contact submission rejected: relay configuration missing");
            return Err(ContactError::Configuration);
        };

        let form = submission.validate()?;
        if let Err(e) = self.limiter.check_and_record(&form.email) {
            tracing::warn!(error = %e, "contact submission rate limited");
            return Err(e.into());
        }

        if let Err(e) = self.relay.send_form(config, &form).await {
            // Undelivered submissions don't count against the sender.
            self.limiter.release(&form.email);
            match &e {
                RelayError::Response { status, body } => {
                    tracing::error!(status, body = %body, "relay rejected contact submission");
                }
                other => tracing::error!(error = %other, "relay call failed"),
            }
            return Err(e.into());
        }

        tracing::info!(service_id = %config.service_id, "contact submission relayed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
