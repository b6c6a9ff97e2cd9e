//! Contact submission driver.
//!
//! DESIGN
//! ======
//! Sequences one submission over the pure `ContactState` transitions:
//! `begin_submit` → relay call → `finish`. The store, the relay and the clock
//! are traits so the same driver runs against a Leptos signal in the browser
//! and against a `RefCell` plus mocks in tests.
//!
//! The driver returns the scheduled reset instead of sleeping on it; the
//! caller decides how to wait (a browser timer, or a manual clock in tests).

#[cfg(test)]
#[path = "contact_flow_test.rs"]
mod contact_flow_test;

use std::cell::RefCell;
use std::future::Future;

use leptos::prelude::*;

use crate::net::api::SubmitError;
use crate::state::contact::{ContactFormInput, ContactState, PendingReset};

/// The collaborator that delivers a filled-in form.
pub trait ContactRelay {
    fn send(&self, form: &ContactFormInput) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Millisecond clock used to stamp reset deadlines.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Somewhere a `ContactState` lives and can be mutated in place.
pub trait ContactStore {
    /// Run `f` against the state. `None` if the state is gone (disposed signal).
    fn modify<T>(&self, f: impl FnOnce(&mut ContactState) -> T) -> Option<T>;
}

impl ContactStore for RwSignal<ContactState> {
    fn modify<T>(&self, f: impl FnOnce(&mut ContactState) -> T) -> Option<T> {
        self.try_update(f)
    }
}

impl ContactStore for RefCell<ContactState> {
    fn modify<T>(&self, f: impl FnOnce(&mut ContactState) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Browser wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now().max(0.0) as u64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0
        }
    }
}

/// Run one submission attempt.
///
/// Returns `None` without calling the relay when a submission is already in
/// flight. Otherwise returns the reset scheduled by the outcome.
pub async fn submit<S, R, C>(store: &S, relay: &R, clock: &C) -> Option<PendingReset>
where
    S: ContactStore,
    R: ContactRelay,
    C: Clock,
{
    let (ticket, form) = store
        .modify(|state| state.begin_submit().map(|ticket| (ticket, state.form.clone())))
        .flatten()?;

    let outcome = relay.send(&form).await;
    if let Err(e) = &outcome {
        report_failure(e);
    }

    let now_ms = clock.now_ms();
    store
        .modify(|state| state.finish(ticket, outcome.is_ok(), now_ms))
        .flatten()
}

fn report_failure(err: &SubmitError) {
    #[cfg(feature = "hydrate")]
    match err {
        SubmitError::Configuration => log::error!("contact relay is not configured on the server"),
        SubmitError::Relay(detail) => log::error!("contact submission failed: {detail}"),
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = err;
}

/// Submit from the page and apply the auto-reset once its deadline passes.
#[cfg(feature = "hydrate")]
pub fn spawn_submit(contact: RwSignal<ContactState>) {
    use crate::net::api::ApiRelay;
    use crate::state::contact::RESET_DELAY_MS;

    leptos::task::spawn_local(async move {
        let Some(reset) = submit(&contact, &ApiRelay, &BrowserClock).await else {
            return;
        };
        gloo_timers::future::sleep(std::time::Duration::from_millis(RESET_DELAY_MS)).await;
        contact.modify(|state| state.tick(reset.due_at_ms));
    });
}
