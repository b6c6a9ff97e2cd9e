//! Relay types — errors and the form payload handed to the relay.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by relay configuration and relay calls.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// One or more required settings are absent or blank.
    #[error("missing relay configuration: {}", vars.join(", "))]
    MissingConfig { vars: Vec<&'static str> },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the relay failed before a response arrived.
    #[error("relay request failed: {0}")]
    Request(String),

    /// The relay answered with a non-success status.
    #[error("relay response error: status {status}")]
    Response { status: u16, body: String },
}

impl crate::error::ErrorCode for RelayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingConfig { .. } => "E_NOT_CONFIGURED",
            Self::HttpClientBuild(_) | Self::Request(_) | Self::Response { .. } => "E_RELAY",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// FORM
// =============================================================================

/// Validated contact form fields, as forwarded to the relay template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}
