//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the bank-details client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Profile service connection settings.
    pub service: ServiceConfig,

    /// Form behaviour.
    pub form: FormConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Profile service connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the profile API (e.g., "https://api.example.com/api").
    pub base_url: String,

    /// Bearer token sent with every request.
    pub bearer_token: Option<String>,

    /// Total time allowed for one call, in seconds.
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            bearer_token: None,
            request_timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }
}

/// Form behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormConfig {
    /// Drop IFSC lookup responses for a code the user has since edited.
    pub discard_stale_lookups: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            discard_stale_lookups: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record lookup and submission metrics.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.service.base_url, "http://localhost:3000/api");
        assert_eq!(config.service.request_timeout_secs, 30);
        assert!(config.service.bearer_token.is_none());
        assert!(config.form.discard_stale_lookups);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [service]
            base_url = "https://profile.example.com/api"
            bearer_token = "secret"

            [form]
            discard_stale_lookups = false
            "#,
        )
        .unwrap();
        assert_eq!(config.service.base_url, "https://profile.example.com/api");
        assert_eq!(config.service.bearer_token.as_deref(), Some("secret"));
        assert_eq!(config.service.connect_timeout_secs, 5);
        assert!(!config.form.discard_stale_lookups);
    }
}
