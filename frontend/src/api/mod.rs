use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use shared::{GatewayResponse, HealthStatus, ReservationGateway, ReservationPayload, SiteConfig, SubmissionError};

pub struct ApiClient;

impl ApiClient {
    /// `POST /sms`. Returns the raw status and body; deciding success is
    /// left to the caller.
    pub async fn send_reservation(
        url: &str,
        payload: &ReservationPayload,
    ) -> Result<GatewayResponse, SubmissionError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| SubmissionError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        Ok(GatewayResponse::new(status, body))
    }

    pub async fn get_version(url: &str) -> Result<Value, String> {
        Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json::<Value>()
            .await
            .map_err(|e| e.to_string())
    }

    /// Log whether the SMS backend answers. Never surfaces to the visitor.
    pub async fn log_health(config: SiteConfig) {
        match Self::get_version(&config.version_url()).await {
            Ok(body) => {
                log::info!("API Status: {}", HealthStatus::from_version(&body).as_str());
            }
            Err(e) => {
                log::debug!("Version check failed: {}", e);
            }
        }
    }
}

/// Reservation gateway backed by `fetch` and browser timers.
pub struct HttpGateway {
    sms_url: String,
}

impl HttpGateway {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            sms_url: config.sms_url(),
        }
    }
}

impl ReservationGateway for HttpGateway {
    async fn send(&self, payload: &ReservationPayload) -> Result<GatewayResponse, SubmissionError> {
        ApiClient::send_reservation(&self.sms_url, payload).await
    }

    async fn pause(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_gateway_targets_sms_endpoint() {
        let config = SiteConfig::default();
        let gateway = HttpGateway::new(&config);
        assert_eq!(gateway.sms_url, "https://solapi-backend.onrender.com/sms");
    }

    #[wasm_bindgen_test]
    async fn test_pause_resolves() {
        let gateway = HttpGateway::new(&SiteConfig::default());
        gateway.pause(1).await;
    }
}
