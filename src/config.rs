//! Site Configuration
//!
//! Optional JSON block in `index.html` (`<script id="site-config" type="application/json">`).
//! Every key falls back to its default.

use serde::Deserialize;

/// DOM id of the configuration block
const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Recipient of the order hand-off
    pub chat_phone: String,
    pub chat_base_url: String,
    /// Plain "talk to us" link
    pub contact_url: String,
    pub toast_duration_ms: u32,
    /// Scroll offset above which the back-to-top button shows
    pub scroll_top_threshold: f64,
    pub hero_interval_ms: u32,
    pub planner_year: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            chat_phone: "5531995057791".to_string(),
            chat_base_url: "https://api.whatsapp.com/send".to_string(),
            contact_url: "https://wa.me/5511999999999".to_string(),
            toast_duration_ms: 3000,
            scroll_top_threshold: 400.0,
            hero_interval_ms: 5000,
            planner_year: "2026".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse site config: {}", e))
    }

    /// Read the config block from the document, defaults when absent or invalid
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            tracing::debug!("no site config block, using defaults");
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                tracing::info!(chat_phone = %config.chat_phone, "site config loaded");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "invalid site config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "chat_phone": "5511000000000", "toast_duration_ms": 1500 }"#,
        )
        .unwrap();
        assert_eq!(config.chat_phone, "5511000000000");
        assert_eq!(config.toast_duration_ms, 1500);
        assert_eq!(config.scroll_top_threshold, 400.0);
        assert_eq!(config.hero_interval_ms, 5000);
        assert_eq!(config.planner_year, "2026");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = SiteConfig::from_json("{ chat_phone: }").unwrap_err();
        assert!(err.starts_with("Failed to parse site config"));
        assert!(SiteConfig::from_json(r#"{ "toast_duration_ms": "soon" }"#).is_err());
    }
}
