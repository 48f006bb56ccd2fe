//! Runtime Settings
//!
//! Build-time overridable settings for the frontend.

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "/api";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Base URL of the REST backend, without trailing slash
    pub api_base_url: String,
    /// How long a transient status message stays visible
    pub status_timeout_ms: u32,
    /// Carousel timer resolution
    pub carousel_tick_ms: u32,
    /// `log` level filter name (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            status_timeout_ms: 3_000,
            carousel_tick_ms: 100,
            log_level: "info".to_string(),
        }
    }
}

impl AppSettings {
    /// Defaults, overridden by `STOREFRONT_API_URL` / `STOREFRONT_LOG` at build time
    pub fn from_env() -> Self {
        Self::from_overrides(option_env!("STOREFRONT_API_URL"), option_env!("STOREFRONT_LOG"))
    }

    fn from_overrides(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut settings = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            settings.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.map(str::trim).filter(|l| !l.is_empty()) {
            settings.log_level = level.to_lowercase();
        }
        settings
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_strip_trailing_slash() {
        let s = AppSettings::from_overrides(Some("https://api.example.com/v1/"), None);
        assert_eq!(s.api_base_url, "https://api.example.com/v1");
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn test_blank_overrides_keep_defaults() {
        let s = AppSettings::from_overrides(Some("  "), Some(""));
        assert_eq!(s, AppSettings::default());
    }

    #[test]
    fn test_level_filter_falls_back_to_info() {
        let s = AppSettings::from_overrides(None, Some("DEBUG"));
        assert_eq!(s.level_filter(), log::LevelFilter::Debug);

        let s = AppSettings::from_overrides(None, Some("chatty"));
        assert_eq!(s.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{"apiBaseUrl":"/backend"}"#).unwrap();
        assert_eq!(s.api_base_url, "/backend");
        assert_eq!(s.status_timeout_ms, 3_000);
    }
}
