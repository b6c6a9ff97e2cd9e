//! Relay configuration parsed from environment variables.

use super::types::RelayError;

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_RELAY_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_RELAY_CONNECT_TIMEOUT_SECS: u64 = 5;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "EMAILJS_PRIVATE_KEY";
pub const API_URL_VAR: &str = "EMAILJS_API_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for RelayTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_RELAY_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_RELAY_CONNECT_TIMEOUT_SECS }
    }
}

impl RelayTimeouts {
    /// Optional:
    /// - `EMAILJS_REQUEST_TIMEOUT_SECS`: default 15
    /// - `EMAILJS_CONNECT_TIMEOUT_SECS`: default 5
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };
        Self {
            request_secs: parse("EMAILJS_REQUEST_TIMEOUT_SECS", DEFAULT_RELAY_REQUEST_TIMEOUT_SECS),
            connect_secs: parse("EMAILJS_CONNECT_TIMEOUT_SECS", DEFAULT_RELAY_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Credentials and endpoint for the `EmailJS` relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Access token, required only when the relay account runs in strict mode.
    pub private_key: Option<String>,
    pub api_url: String,
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Required:
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional:
    /// - `EMAILJS_PRIVATE_KEY`
    /// - `EMAILJS_API_URL`: default `https://api.emailjs.com`
    ///
    /// # Errors
    ///
    /// Returns `RelayError::MissingConfig` naming every required variable that
    /// is unset or blank.
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RelayError> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let service_id = read(SERVICE_ID_VAR);
        let template_id = read(TEMPLATE_ID_VAR);
        let public_key = read(PUBLIC_KEY_VAR);

        let (Some(service_id), Some(template_id), Some(public_key)) =
            (service_id.clone(), template_id.clone(), public_key.clone())
        else {
            let vars = [(SERVICE_ID_VAR, service_id), (TEMPLATE_ID_VAR, template_id), (PUBLIC_KEY_VAR, public_key)]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(var, _)| var)
                .collect();
            return Err(RelayError::MissingConfig { vars });
        };

        let api_url = read(API_URL_VAR)
            .unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self { service_id, template_id, public_key, private_key: read(PRIVATE_KEY_VAR), api_url })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
