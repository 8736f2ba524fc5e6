//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the service URL and value ranges (timeouts > 0)
//! - Reject unknown log levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::fmt;
use url::Url;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.service.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            if url.cannot_be_a_base() {
                errors.push(ValidationError::new(
                    "service.base_url",
                    "must be able to carry a path",
                ));
            }
        }
        Ok(url) => errors.push(ValidationError::new(
            "service.base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "service.base_url",
            format!("invalid URL '{}': {}", config.service.base_url, e),
        )),
    }

    if config.service.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "service.request_timeout_secs",
            "must be greater than zero",
        ));
    }
    if config.service.connect_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "service.connect_timeout_secs",
            "must be greater than zero",
        ));
    }

    if let Some(token) = &config.service.bearer_token {
        if token.trim().is_empty() {
            errors.push(ValidationError::new(
                "service.bearer_token",
                "must not be blank when set",
            ));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_problem() {
        let mut config = AppConfig::default();
        config.service.base_url = "not a url".to_string();
        config.service.request_timeout_secs = 0;
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "service.base_url",
                "service.request_timeout_secs",
                "observability.log_level"
            ]
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = AppConfig::default();
        config.service.base_url = "ftp://files.example.com".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].message.contains("ftp"));
    }

    #[test]
    fn test_blank_token_rejected() {
        let mut config = AppConfig::default();
        config.service.bearer_token = Some("  ".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].to_string(), "service.bearer_token: must not be blank when set");
    }
}
