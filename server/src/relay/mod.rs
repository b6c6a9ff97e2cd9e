//! Relay — delivery of contact submissions through `EmailJS`.
//!
//! DESIGN
//! ======
//! `ContactRelay` is the seam between the contact service and the outside
//! world. The service owns the configuration and passes it on every call, so
//! a missing configuration never reaches this layer.

pub mod config;
pub mod emailjs;
pub mod types;

use config::RelayConfig;
use types::{ContactForm, RelayError};

/// Delivers one contact form through the relay.
#[async_trait::async_trait]
pub trait ContactRelay: Send + Sync {
    async fn send_form(&self, config: &RelayConfig, form: &ContactForm) -> Result<(), RelayError>;
}
