use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SiteConfig;
use crate::validation::ValidInput;

// ============================================================================
// Time Slot Types
// ============================================================================

/// A selectable visit time: machine value plus the label shown to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub value: String,
    pub label: String,
}

impl TimeSlot {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Slot for a whole hour, labelled the Korean way ("오전 10시", "오후 2시").
    pub fn on_the_hour(hour: u32) -> Self {
        let label = match hour {
            0 => "오전 12시".to_string(),
            1..=11 => format!("오전 {}시", hour),
            12 => "오후 12시".to_string(),
            _ => format!("오후 {}시", hour - 12),
        };
        Self::new(format!("{:02}:00", hour), label)
    }
}

/// Hourly slots from `first` to `last`, both inclusive.
pub fn hourly_slots(first: u32, last: u32) -> Vec<TimeSlot> {
    (first..=last.min(23)).map(TimeSlot::on_the_hour).collect()
}

// ============================================================================
// Reservation Types
// ============================================================================

/// Body of `POST /sms`.
///
/// Only built from a [`ValidInput`], so a payload always carries a normalized
/// phone number and a chosen visit time. The time travels as its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationPayload {
    site: String,
    #[serde(rename = "vd")]
    visit_date: String,
    #[serde(rename = "vtLabel")]
    visit_time_label: String,
    name: String,
    phone: String,
    #[serde(rename = "adminPhone")]
    admin_phone: String,
    memo: String,
}

impl ReservationPayload {
    pub fn new(config: &SiteConfig, input: ValidInput, visit_time_label: &str) -> Self {
        Self {
            site: config.site_name.clone(),
            visit_date: input.visit_date,
            visit_time_label: visit_time_label.trim().to_string(),
            name: input.name,
            phone: input.phone,
            admin_phone: config.admin_phone.clone(),
            memo: String::new(),
        }
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn visit_date(&self) -> &str {
        &self.visit_date
    }

    pub fn visit_time_label(&self) -> &str {
        &self.visit_time_label
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn admin_phone(&self) -> &str {
        &self.admin_phone
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }
}

// ============================================================================
// API Response Types
// ============================================================================

/// Raw HTTP answer handed back by a gateway: status and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl GatewayResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Connectivity reported by `GET /version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Connected,
    Disconnected,
}

impl HealthStatus {
    /// `from_admin` is read with JavaScript truthiness, since the endpoint
    /// does not promise a boolean.
    pub fn from_version(body: &Value) -> Self {
        let truthy = match body.get("from_admin") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        };

        if truthy {
            HealthStatus::Connected
        } else {
            HealthStatus::Disconnected
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Connected => "Connected",
            HealthStatus::Disconnected => "Disconnected",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_on_the_hour_labels() {
        assert_eq!(TimeSlot::on_the_hour(10), TimeSlot::new("10:00", "오전 10시"));
        assert_eq!(TimeSlot::on_the_hour(12), TimeSlot::new("12:00", "오후 12시"));
        assert_eq!(TimeSlot::on_the_hour(14), TimeSlot::new("14:00", "오후 2시"));
        assert_eq!(TimeSlot::on_the_hour(0).label, "오전 12시");
    }

    #[test]
    fn test_hourly_slots_range() {
        let slots = hourly_slots(10, 18);
        assert_eq!(slots.len(), 9);
        assert_eq!(slots.first().unwrap().value, "10:00");
        assert_eq!(slots.last().unwrap().label, "오후 6시");
        assert!(hourly_slots(18, 10).is_empty());
    }

    #[test]
    fn test_payload_wire_names() {
        let input = ValidInput {
            name: "홍길동".to_string(),
            phone: "01043597772".to_string(),
            visit_date: "2024-05-01".to_string(),
            visit_time: "14:00".to_string(),
        };
        let payload = ReservationPayload::new(&SiteConfig::default(), input, " 오후 2시 ");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "site": "월드 메르디앙",
                "vd": "2024-05-01",
                "vtLabel": "오후 2시",
                "name": "홍길동",
                "phone": "01043597772",
                "adminPhone": "01043597772",
                "memo": ""
            })
        );
    }

    #[test]
    fn test_gateway_response_success_range() {
        assert!(GatewayResponse::new(200, "").is_success());
        assert!(GatewayResponse::new(204, "").is_success());
        assert!(!GatewayResponse::new(199, "").is_success());
        assert!(!GatewayResponse::new(302, "").is_success());
        assert!(!GatewayResponse::new(500, "").is_success());
    }

    #[test]
    fn test_health_status_truthiness() {
        assert_eq!(HealthStatus::from_version(&json!({"from_admin": true})), HealthStatus::Connected);
        assert_eq!(HealthStatus::from_version(&json!({"from_admin": "yes"})), HealthStatus::Connected);
        assert_eq!(HealthStatus::from_version(&json!({"from_admin": 1})), HealthStatus::Connected);
        assert_eq!(HealthStatus::from_version(&json!({"from_admin": {}})), HealthStatus::Connected);
        assert_eq!(HealthStatus::from_version(&json!({"from_admin": false})), HealthStatus::Disconnected);
        assert_eq!(HealthStatus::from_version(&json!({"from_admin": 0})), HealthStatus::Disconnected);
        assert_eq!(HealthStatus::from_version(&json!({"from_admin": ""})), HealthStatus::Disconnected);
        assert_eq!(HealthStatus::from_version(&json!({"from_admin": null})), HealthStatus::Disconnected);
        assert_eq!(HealthStatus::from_version(&json!({})), HealthStatus::Disconnected);
        assert_eq!(HealthStatus::from_version(&json!([1, 2])), HealthStatus::Disconnected);
    }
}
