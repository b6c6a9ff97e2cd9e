//! Contact form state machine for the page's contact section.
//!
//! DESIGN
//! ======
//! One `ContactState` per page session holds the three form fields and the
//! current `SubmissionStatus`. All mutation goes through the transition
//! methods below; views only read from it.
//!
//! The auto-reset back to `Idle` is a deadline owned by the state rather than
//! a detached callback. Every submission attempt bumps `generation` and drops
//! any pending reset, so a timer left over from an earlier attempt cannot
//! knock a newer attempt back to `Idle`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

/// Delay before a finished submission (sent or failed) returns to `Idle`.
pub const RESET_DELAY_MS: u64 = 3000;

/// The three user-editable contact fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

/// Addressable form fields, named after the form controls' `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Progress of the current submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl SubmissionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Error => "error",
        }
    }

    /// Submit button text for this status.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Sent => "Message Sent!",
            Self::Error => "Error Sending",
        }
    }

    #[must_use]
    pub fn button_class(self) -> &'static str {
        match self {
            Self::Idle => "contact-submit contact-submit--idle",
            Self::Sending => "contact-submit contact-submit--sending",
            Self::Sent => "contact-submit contact-submit--sent",
            Self::Error => "contact-submit contact-submit--error",
        }
    }
}

/// Identifies one dispatched submission. Returned by [`ContactState::begin_submit`]
/// and handed back to [`ContactState::finish`] when the relay answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// A scheduled return to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReset {
    pub generation: u64,
    /// Clock reading (milliseconds) at or after which the reset applies.
    pub due_at_ms: u64,
}

/// Contact section state: form fields, status and the pending auto-reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactFormInput,
    pub status: SubmissionStatus,
    generation: u64,
    pending_reset: Option<PendingReset>,
}

impl ContactState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set exactly one field; the others are left untouched.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Message => self.form.message = value,
        }
    }

    /// The submit affordance is disabled while a submission is in flight.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    #[must_use]
    pub fn pending_reset(&self) -> Option<PendingReset> {
        self.pending_reset
    }

    /// Move to `Sending` and hand out a ticket for the dispatched request.
    ///
    /// Returns `None` without changing anything when a submission is already
    /// in flight. Any reset pending from an earlier attempt is cancelled.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.submit_disabled() {
            return None;
        }
        self.generation += 1;
        self.pending_reset = None;
        self.status = SubmissionStatus::Sending;
        Some(SubmitTicket { generation: self.generation })
    }

    /// Record the relay outcome for `ticket` and schedule the reset.
    ///
    /// On delivery the form is cleared; on failure it is kept so the user can
    /// resubmit without retyping. Stale tickets are ignored.
    pub fn finish(&mut self, ticket: SubmitTicket, delivered: bool, now_ms: u64) -> Option<PendingReset> {
        if ticket.generation != self.generation || self.status != SubmissionStatus::Sending {
            return None;
        }
        if delivered {
            self.status = SubmissionStatus::Sent;
            self.form = ContactFormInput::default();
        } else {
            self.status = SubmissionStatus::Error;
        }
        let reset = PendingReset { generation: self.generation, due_at_ms: now_ms.saturating_add(RESET_DELAY_MS) };
        self.pending_reset = Some(reset);
        Some(reset)
    }

    /// Apply the pending reset if `now_ms` has reached its deadline.
    ///
    /// Returns `true` when the status went back to `Idle`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(reset) = self.pending_reset else {
            return false;
        };
        if reset.generation != self.generation || now_ms < reset.due_at_ms {
            return false;
        }
        self.pending_reset = None;
        self.status = SubmissionStatus::Idle;
        true
    }
}
