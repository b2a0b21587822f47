pub mod config;
pub mod page;
pub mod reservation;
pub mod submission;
pub mod time_selector;
pub mod types;
pub mod validation;

pub use config::SiteConfig;
pub use page::{anchor_selector, parallax_offset, parallax_transform, TabSet};
pub use reservation::{
    prepare_payload, submit_reservation, Notice, ReservationError, ReservationFields,
    ReservationGateway, ReservationSurface,
};
pub use submission::{interpret_response, InFlightGuard, InFlightTicket, SubmissionError, SubmitUiState};
pub use time_selector::TimeSelectorState;
pub use types::{hourly_slots, GatewayResponse, HealthStatus, ReservationPayload, TimeSlot};
pub use validation::{normalize_phone, validate, visit_date_value, ValidInput, ValidationError};
