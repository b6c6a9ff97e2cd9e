//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the contact service, which in turn owns the relay client, the
//! relay configuration loaded at startup and the submission rate limiter.

use std::sync::Arc;

use crate::services::contact::ContactService;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub contact: Arc<ContactService>,
}

impl AppState {
    #[must_use]
    pub fn new(contact: ContactService) -> Self {
        Self { contact: Arc::new(contact) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::test_helpers::{MockRelay, relay_config, test_app_state};

    #[test]
    fn app_state_reports_configuration() {
        let configured = test_app_state(Some(relay_config()), Arc::new(MockRelay::succeeding()));
        assert!(configured.contact.is_configured());

        let unconfigured = test_app_state(None, Arc::new(MockRelay::succeeding()));
        assert!(!unconfigured.contact.is_configured());
    }

    #[test]
    fn app_state_clones_share_service() {
        let state = test_app_state(None, Arc::new(MockRelay::succeeding()));
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.contact, &cloned.contact));
    }
}
