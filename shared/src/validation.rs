use chrono::NaiveDate;
use thiserror::Error;

pub const VISIT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is empty")]
    EmptyName,
    #[error("Phone number must have 10 or 11 digits")]
    InvalidPhone,
    #[error("Visit date is missing")]
    MissingDate,
    #[error("Visit time is missing")]
    MissingTime,
}

/// Reservation fields after validation: trimmed, phone reduced to digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput {
    pub name: String,
    pub phone: String,
    pub visit_date: String,
    pub visit_time: String,
}

/// Strip everything that is not an ASCII digit.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn is_valid_phone(normalized: &str) -> bool {
    matches!(normalized.len(), 10 | 11)
}

/// Check the reservation fields in display order: name, phone, date, time.
/// The first failing rule is returned.
pub fn validate(
    name: &str,
    raw_phone: &str,
    visit_date: &str,
    visit_time: &str,
) -> Result<ValidInput, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let phone = normalize_phone(raw_phone);
    if !is_valid_phone(&phone) {
        return Err(ValidationError::InvalidPhone);
    }

    let visit_date = visit_date.trim();
    if visit_date.is_empty() {
        return Err(ValidationError::MissingDate);
    }

    let visit_time = visit_time.trim();
    if visit_time.is_empty() {
        return Err(ValidationError::MissingTime);
    }

    Ok(ValidInput {
        name: name.to_string(),
        phone,
        visit_date: visit_date.to_string(),
        visit_time: visit_time.to_string(),
    })
}

/// Value of the date field as it is sent: `YYYY-MM-DD`, or empty when unset.
pub fn visit_date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(VISIT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
