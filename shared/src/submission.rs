use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;
use thiserror::Error;

use crate::types::GatewayResponse;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("HTTP {0}")]
    Http(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

/// Decide the outcome of `POST /sms`.
///
/// The body is parsed as JSON when it can be; a body that is not JSON is not
/// an error. Only the status code decides success.
pub fn interpret_response(response: &GatewayResponse) -> Result<Option<Value>, SubmissionError> {
    let data = serde_json::from_str::<Value>(&response.body).ok();

    if response.is_success() {
        Ok(data)
    } else {
        Err(SubmissionError::Http(response.status))
    }
}

/// What the submit button shows and whether it can be pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitUiState {
    pub enabled: bool,
    pub label: String,
}

impl SubmitUiState {
    pub fn idle(label: impl Into<String>, consent_given: bool) -> Self {
        Self {
            enabled: consent_given,
            label: label.into(),
        }
    }

    pub fn pending(label: impl Into<String>) -> Self {
        Self {
            enabled: false,
            label: label.into(),
        }
    }

    /// The consent box drives `enabled`, except while a request is in flight.
    pub fn on_consent_change(&mut self, checked: bool, in_flight: bool) {
        if !in_flight {
            self.enabled = checked;
        }
    }
}

/// Single-slot flag marking a reservation request in flight.
///
/// Clones share the flag. [`InFlightGuard::try_acquire`] hands out at most one
/// [`InFlightTicket`] at a time; dropping the ticket frees the slot.
#[derive(Debug, Clone, Default)]
pub struct InFlightGuard {
    active: Rc<Cell<bool>>,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn try_acquire(&self) -> Option<InFlightTicket> {
        if self.active.replace(true) {
            return None;
        }
        Some(InFlightTicket {
            active: Rc::clone(&self.active),
        })
    }
}

#[derive(Debug)]
pub struct InFlightTicket {
    active: Rc<Cell<bool>>,
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.active.set(false);
    }
}
