/// Site-wide settings for the showroom page.
///
/// Defaults are the production values. A build can override a few of them
/// through environment variables captured at compile time, see [`SiteConfig::from_env`].
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub site_name: String,
    pub api_base: String,
    pub admin_phone: String,
    pub language: String,
    pub success_delay_ms: u32,
    pub cta_reveal_delay_ms: u32,
    pub parallax_factor: f64,
    pub parallax_min_width_px: u32,
    pub first_slot_hour: u32,
    pub last_slot_hour: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "월드 메르디앙".to_string(),
            api_base: "https://solapi-backend.onrender.com".to_string(),
            admin_phone: "01043597772".to_string(),
            language: "ko".to_string(),
            success_delay_ms: 200,
            cta_reveal_delay_ms: 200,
            parallax_factor: 0.05,
            parallax_min_width_px: 821,
            first_slot_hour: 10,
            last_slot_hour: 18,
        }
    }
}

impl SiteConfig {
    /// Build the config from variables baked in at compile time.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "MERIDIAN_API_BASE" => option_env!("MERIDIAN_API_BASE").map(str::to_string),
            "MERIDIAN_ADMIN_PHONE" => option_env!("MERIDIAN_ADMIN_PHONE").map(str::to_string),
            "MERIDIAN_SITE_NAME" => option_env!("MERIDIAN_SITE_NAME").map(str::to_string),
            "MERIDIAN_LANGUAGE" => option_env!("MERIDIAN_LANGUAGE").map(str::to_string),
            _ => None,
        })
    }

    /// Apply overrides from `lookup` on top of the defaults.
    /// Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            site_name: get("MERIDIAN_SITE_NAME").unwrap_or(defaults.site_name),
            api_base: get("MERIDIAN_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            admin_phone: get("MERIDIAN_ADMIN_PHONE").unwrap_or(defaults.admin_phone),
            language: get("MERIDIAN_LANGUAGE").unwrap_or(defaults.language),
            ..defaults
        }
    }

    pub fn sms_url(&self) -> String {
        format!("{}/sms", self.api_base)
    }

    pub fn version_url(&self) -> String {
        format!("{}/version", self.api_base)
    }

    /// Media query gating the parallax effect.
    pub fn parallax_media_query(&self) -> String {
        format!("(min-width: {}px)", self.parallax_min_width_px)
    }
}
