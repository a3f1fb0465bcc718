use thiserror::Error;

use crate::config::ConfigError;

/// Error type shared by the builders, the push client and the CLI.
///
/// Build-time and configuration problems are raised synchronously before
/// any request is made; transport failures carry the underlying
/// `reqwest::Error` as their source.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Send attempted before the client was given a configuration
    #[error("Push client is not initialized; call init() with tenant id, app secret and region first")]
    NotInitialized,

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// The notification document could not be encoded
    #[error("Failed to serialize notification: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request never produced an HTTP response
    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Shorthand for [`AppError::Validation`]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "config".to_string(),
        };
        AppError::Configuration {
            key,
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = AppError::validation("alert", "Alert text is required");
        assert_eq!(
            err.to_string(),
            "Validation failed for alert: Alert text is required"
        );
    }

    #[test]
    fn test_config_error_keeps_field_as_key() {
        let err: AppError = ConfigError::validation("push.region", "unknown").into();
        match err {
            AppError::Configuration { key, source } => {
                assert_eq!(key, "push.region");
                assert!(source.to_string().contains("unknown"));
            }
            other => panic!("expected Configuration, got {other:?}"),
        }

        let err: AppError = ConfigError::file_not_found("x.toml").into();
        assert!(matches!(err, AppError::Configuration { ref key, .. } if key == "config"));
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_from_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = source.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
