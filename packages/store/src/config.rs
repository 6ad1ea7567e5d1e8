//! # App configuration — `bizledger.toml`
//!
//! Client-side configuration, deserialized from TOML. All sections and
//! fields have defaults so a missing or partial file is equivalent to the
//! default configuration.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//!
//! [pagination]
//! page_size = 10       # rows per displayed page
//! fetch_limit = 200    # snapshot size requested from the backend
//!
//! [notices]
//! login_redirect_delay_ms = 500
//! dismiss_after_ms = 4000
//! ```

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
}

/// Backend endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are joined to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Working-list pagination configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Rows shown per page in the approvals table.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// `per_page` sent when fetching the pending-registration snapshot.
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,
}

/// Transient-notice timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// Pause after a successful login before navigating away, so the
    /// success notice is visible. 0 navigates immediately.
    #[serde(default = "default_login_redirect_delay_ms")]
    pub login_redirect_delay_ms: u64,
    /// How long a notice stays up before auto-dismissing. 0 disables.
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_fetch_limit() -> u32 {
    200
}

fn default_login_redirect_delay_ms() -> u64 {
    500
}

fn default_dismiss_after_ms() -> u64 {
    4000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            fetch_limit: default_fetch_limit(),
        }
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            login_redirect_delay_ms: default_login_redirect_delay_ms(),
            dismiss_after_ms: default_dismiss_after_ms(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bizledger.toml"
    }

    /// Parse from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.notices.login_redirect_delay_ms, 500);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://erp.example.com/api"

            [notices]
            login_redirect_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://erp.example.com/api");
        assert_eq!(config.notices.login_redirect_delay_ms, 0);
        assert_eq!(config.notices.dismiss_after_ms, 4000);
        assert_eq!(config.pagination.fetch_limit, 200);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let rendered = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&rendered).unwrap(), config);
    }
}
