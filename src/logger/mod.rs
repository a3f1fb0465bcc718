//! Logging setup based on `tracing-subscriber`.
//!
//! The library only emits `tracing` events; binaries call [`init_logger`]
//! once at startup. Output goes to stderr so that stdout stays free for
//! command output such as `--dry-run` documents.

pub mod config;

pub use config::{LogFormat, LoggerConfig};

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
///
/// # Errors
/// Fails on an invalid level or when a global subscriber is already set.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.to_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let use_ansi = config.colored && std::io::stderr().is_terminal();
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_rejected_before_install() {
        let config = LoggerConfig::default().with_level("chatty");
        assert!(init_logger(config).is_err());
    }

    #[test]
    fn test_second_init_fails_instead_of_panicking() {
        let config = LoggerConfig {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            colored: false,
        };
        // The first call may already have happened in another test thread
        let _ = init_logger(config.clone());
        assert!(init_logger(config).is_err());
    }
}
