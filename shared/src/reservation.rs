//! The reservation submit flow.
//!
//! The flow only talks to the page through [`ReservationSurface`] and to the
//! network through [`ReservationGateway`], so it runs the same against Leptos
//! signals and against test doubles.

use thiserror::Error;

use crate::config::SiteConfig;
use crate::submission::{interpret_response, InFlightGuard, SubmissionError, SubmitUiState};
use crate::types::{GatewayResponse, ReservationPayload};
use crate::validation::{validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Consent to personal data collection is required")]
    ConsentRequired,
    #[error("A reservation is already being sent")]
    AlreadyPending,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl ReservationError {
    /// Message for the visitor. Submission failures collapse into one generic
    /// notice; a duplicate submit is silent.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ReservationError::ConsentRequired => Some(Notice::ConsentRequired),
            ReservationError::AlreadyPending => None,
            ReservationError::Invalid(ValidationError::EmptyName) => Some(Notice::EmptyName),
            ReservationError::Invalid(ValidationError::InvalidPhone) => Some(Notice::InvalidPhone),
            ReservationError::Invalid(ValidationError::MissingDate) => Some(Notice::MissingDate),
            ReservationError::Invalid(ValidationError::MissingTime) => Some(Notice::MissingTime),
            ReservationError::Submission(_) => Some(Notice::SendFailed),
        }
    }
}

/// Blocking notification shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ConsentRequired,
    EmptyName,
    InvalidPhone,
    MissingDate,
    MissingTime,
    Sent { name: String },
    SendFailed,
}

impl Notice {
    pub fn translation_key(&self) -> &'static str {
        match self {
            Notice::ConsentRequired => "reservation.notice.consent_required",
            Notice::EmptyName => "reservation.notice.empty_name",
            Notice::InvalidPhone => "reservation.notice.invalid_phone",
            Notice::MissingDate => "reservation.notice.missing_date",
            Notice::MissingTime => "reservation.notice.missing_time",
            Notice::Sent { .. } => "reservation.notice.sent",
            Notice::SendFailed => "reservation.notice.send_failed",
        }
    }
}

/// Raw form values as the page holds them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFields {
    pub name: String,
    pub phone: String,
    pub visit_date: String,
    pub visit_time: String,
    pub visit_time_label: String,
}

/// What the flow needs from the page.
pub trait ReservationSurface {
    fn consent_given(&self) -> bool;
    fn fields(&self) -> ReservationFields;
    fn submit_ui(&self) -> SubmitUiState;
    fn set_submit_ui(&self, state: SubmitUiState);
    fn pending_label(&self) -> String;
    /// Button text once the request settles, read in the current language.
    fn idle_label(&self) -> String;
    fn notify(&self, notice: Notice);
    /// Clear the form fields and the time selection.
    fn reset(&self);
}

/// What the flow needs from the network and the clock.
#[allow(async_fn_in_trait)]
pub trait ReservationGateway {
    async fn send(&self, payload: &ReservationPayload) -> Result<GatewayResponse, SubmissionError>;
    async fn pause(&self, millis: u32);
}

/// Consent first, then the fields; builds the payload when everything passes.
pub fn prepare_payload(
    config: &SiteConfig,
    consent_given: bool,
    fields: &ReservationFields,
) -> Result<ReservationPayload, ReservationError> {
    if !consent_given {
        return Err(ReservationError::ConsentRequired);
    }

    let input = validate(
        &fields.name,
        &fields.phone,
        &fields.visit_date,
        &fields.visit_time,
    )?;

    Ok(ReservationPayload::new(config, input, &fields.visit_time_label))
}

/// Run one submit: validate, send, report, and put the button back.
///
/// Returns the payload that was delivered. On validation errors nothing is
/// sent and the button is left alone.
pub async fn submit_reservation<S, G>(
    config: &SiteConfig,
    guard: &InFlightGuard,
    surface: &S,
    gateway: &G,
) -> Result<ReservationPayload, ReservationError>
where
    S: ReservationSurface,
    G: ReservationGateway,
{
    let Some(ticket) = guard.try_acquire() else {
        log::debug!("Ignoring submit while a reservation is in flight");
        return Err(ReservationError::AlreadyPending);
    };

    let payload = match prepare_payload(config, surface.consent_given(), &surface.fields()) {
        Ok(payload) => payload,
        Err(e) => {
            log::info!("Reservation rejected: {}", e);
            if let Some(notice) = e.notice() {
                surface.notify(notice);
            }
            return Err(e);
        }
    };

    surface.set_submit_ui(SubmitUiState::pending(surface.pending_label()));

    let result = match gateway.send(&payload).await {
        Ok(response) => interpret_response(&response),
        Err(e) => Err(e),
    };

    let outcome = match result {
        Ok(data) => {
            if let Some(data) = data {
                log::debug!("Reservation response: {}", data);
            }
            gateway.pause(config.success_delay_ms).await;
            surface.notify(Notice::Sent {
                name: payload.name().to_string(),
            });
            surface.reset();
            Ok(payload)
        }
        Err(e) => {
            log::error!("Reservation request failed: {}", e);
            surface.notify(Notice::SendFailed);
            Err(ReservationError::Submission(e))
        }
    };

    drop(ticket);
    surface.set_submit_ui(SubmitUiState::idle(surface.idle_label(), surface.consent_given()));

    outcome
}
