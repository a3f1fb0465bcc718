//! Configuration validation logic
//!
//! Checks run right after loading. Credentials are not required here because
//! the CLI may still supply them; [`PushSettings::to_push_config`] enforces
//! them when a client is built.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{AppConfig, HttpConfig, LoggerSettings, PushSettings};
use crate::push::Region;

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl PushSettings {
    /// Validate push settings
    ///
    /// # Validation Rules
    /// - Region must be a known region name
    /// - Base URL, when set, must be an http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.parse::<Region>().is_err() {
            return Err(ConfigError::validation(
                "push.region",
                format!(
                    "Invalid region '{}'. Valid regions are: us-south, united-kingdom, sydney",
                    self.region
                ),
            ));
        }

        if let Some(base_url) = self.base_url.as_deref().filter(|u| !u.is_empty()) {
            let url = Url::parse(base_url).map_err(|_| {
                ConfigError::validation("push.base_url", format!("Invalid URL format: {}", base_url))
            })?;
            if url.scheme() != "https" && url.scheme() != "http" {
                return Err(ConfigError::validation(
                    "push.base_url",
                    "URL must use http or https protocol",
                ));
            }
        }

        Ok(())
    }
}

impl HttpConfig {
    /// Validate HTTP client settings
    ///
    /// # Validation Rules
    /// - Timeouts, when set, must be greater than 0
    /// - User agent must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::validation(
                "http.timeout_secs",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_secs == Some(0) {
            return Err(ConfigError::validation(
                "http.connect_timeout_secs",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::validation(
                "http.user_agent",
                "User agent cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl AppConfig {
    /// Validate all sections, returning the first error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.push.validate()?;
        self.http.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(result: Result<(), ConfigError>) -> String {
        match result {
            Err(ConfigError::ValidationError { field, .. }) => field,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_region() {
        let mut config = AppConfig::default();
        config.push.region = "eu-de".to_string();
        assert_eq!(field_of(config.validate()), "push.region");
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = AppConfig::default();
        config.push.base_url = Some("imfpush.example.com".to_string());
        assert_eq!(field_of(config.validate()), "push.base_url");

        config.push.base_url = Some("ftp://imfpush.example.com".to_string());
        assert_eq!(field_of(config.validate()), "push.base_url");

        config.push.base_url = Some(String::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let mut config = AppConfig::default();
        config.http.timeout_secs = Some(0);
        assert_eq!(field_of(config.validate()), "http.timeout_secs");

        config.http.timeout_secs = Some(30);
        config.http.connect_timeout_secs = Some(0);
        assert_eq!(field_of(config.validate()), "http.connect_timeout_secs");
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = AppConfig::default();
        config.http.user_agent = "  ".to_string();
        assert_eq!(field_of(config.validate()), "http.user_agent");
    }

    #[test]
    fn test_logger_level_and_format() {
        let mut config = AppConfig::default();
        config.logger.level = "verbose".to_string();
        assert_eq!(field_of(config.validate()), "logger.level");

        config.logger.level = "WARN".to_string();
        config.logger.format = "yaml".to_string();
        assert_eq!(field_of(config.validate()), "logger.format");
    }
}
