//! Configuration structures for imfpush-rs
//!
//! Every section has serde defaults, so an empty file (or no file at all)
//! deserializes to a usable [`AppConfig`]; credentials are usually supplied
//! through `IMFPUSH_PUSH__*` environment variables or CLI flags.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::error::AppError;
use crate::logger::{LogFormat, LoggerConfig};
use crate::push::{PushConfig, Region};

// ============================================================================
// Default value functions
// ============================================================================

fn default_region() -> String {
    Region::default().as_str().to_string()
}

fn default_user_agent() -> String {
    format!("imfpush-rs/{}", crate::pkg_version())
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    LogFormat::default().as_str().to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Push Configuration
// ============================================================================

/// Tenant credentials and endpoint selection
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSettings {
    /// Application (tenant) id assigned by the push service
    #[serde(default)]
    pub tenant_id: String,

    /// Value of the `appSecret` header
    #[serde(default)]
    pub app_secret: String,

    /// One of `us-south`, `united-kingdom`, `sydney`
    #[serde(default = "default_region")]
    pub region: String,

    /// Overrides the regional host, e.g. for a private deployment
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for PushSettings {
    fn default() -> Self {
        Self {
            tenant_id: String::new(),
            app_secret: String::new(),
            region: default_region(),
            base_url: None,
        }
    }
}

impl std::fmt::Debug for PushSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushSettings")
            .field("tenant_id", &self.tenant_id)
            .field("app_secret", &"<redacted>")
            .field("region", &self.region)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl PushSettings {
    /// Convert to a client configuration
    ///
    /// # Errors
    /// Fails when the region is unknown, a credential is empty, or the base
    /// URL is malformed.
    pub fn to_push_config(&self) -> Result<PushConfig, ConfigError> {
        let to_config_error = |key: &str, err: AppError| match err {
            AppError::Validation { field, reason } => {
                ConfigError::validation(format!("push.{}", field), reason)
            }
            other => ConfigError::validation(format!("push.{}", key), other.to_string()),
        };

        let region: Region = self
            .region
            .parse()
            .map_err(|e| to_config_error("region", e))?;

        let config = PushConfig::new(self.tenant_id.as_str(), self.app_secret.as_str(), region)
            .map_err(|e| to_config_error("tenant_id", e))?;

        match &self.base_url {
            Some(base_url) if !base_url.is_empty() => config
                .with_base_url(base_url)
                .map_err(|e| to_config_error("base_url", e)),
            _ => Ok(config),
        }
    }
}

// ============================================================================
// HTTP Configuration
// ============================================================================

/// Settings for the underlying HTTP client
///
/// Unset timeouts leave the HTTP client's own defaults in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Connect timeout in seconds
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,

    /// `User-Agent` header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            connect_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Console logger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "full", "compact", "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Use ANSI colors when stderr is a terminal
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: true,
        }
    }
}

impl LoggerSettings {
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format: LogFormat = self
            .format
            .parse()
            .map_err(|e: anyhow::Error| ConfigError::validation("logger.format", e.to_string()))?;

        let config = LoggerConfig {
            level: self.level,
            format,
            colored: self.colored,
        };
        config
            .validate()
            .map_err(|e| ConfigError::validation("logger.level", e.to_string()))?;

        Ok(config)
    }
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub push: PushSettings,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.push.region, "us-south");
        assert_eq!(config.logger.format, "full");
        assert!(config.http.user_agent.starts_with("imfpush-rs/"));
    }

    #[test]
    fn test_to_push_config() {
        let settings = PushSettings {
            tenant_id: "T".to_string(),
            app_secret: "S".to_string(),
            region: "sydney".to_string(),
            base_url: None,
        };

        let config = settings.to_push_config().unwrap();
        assert_eq!(
            config.messages_url(),
            "https://imfpush.au-syd.bluemix.net:443/imfpush/v1/apps/T/messages"
        );
    }

    #[test]
    fn test_to_push_config_with_base_url() {
        let settings = PushSettings {
            tenant_id: "T".to_string(),
            app_secret: "S".to_string(),
            base_url: Some("http://localhost:9080".to_string()),
            ..Default::default()
        };

        assert_eq!(
            settings.to_push_config().unwrap().messages_url(),
            "http://localhost:9080/imfpush/v1/apps/T/messages"
        );
    }

    #[test]
    fn test_to_push_config_missing_secret() {
        let settings = PushSettings {
            tenant_id: "T".to_string(),
            ..Default::default()
        };

        match settings.to_push_config() {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "push.app_secret"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_to_push_config_bad_region() {
        let settings = PushSettings {
            tenant_id: "T".to_string(),
            app_secret: "S".to_string(),
            region: "moon".to_string(),
            base_url: None,
        };

        assert!(matches!(
            settings.to_push_config(),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "push.region"
        ));
    }

    #[test]
    fn test_push_settings_debug_redacts_secret() {
        let settings = PushSettings {
            app_secret: "top-secret".to_string(),
            ..Default::default()
        };
        assert!(!format!("{:?}", settings).contains("top-secret"));
    }

    #[test]
    fn test_logger_settings_conversion() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            format: "json".to_string(),
            colored: false,
        };

        let config = settings.into_logger_config().unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
        assert!(!config.colored);
    }

    #[test]
    fn test_logger_settings_bad_format() {
        let settings = LoggerSettings {
            format: "xml".to_string(),
            ..Default::default()
        };
        assert!(settings.into_logger_config().is_err());
    }
}
