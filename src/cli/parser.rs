//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value as JsonValue;
use std::path::PathBuf;

use crate::models::{GcmPriority, Platform};
use crate::push::Region;

/// Command-line client for the IMF push notification service
#[derive(Parser, Debug)]
#[command(name = "imfpush")]
#[command(about = "Send push notifications through the IMF push service")]
#[command(long_about = "
imfpush assembles a push notification from command-line flags and submits it
to the IMF push backend of the configured region. Credentials are read from
configuration files, IMFPUSH_* environment variables or flags.

EXAMPLES:
    # Broadcast to every registered device
    imfpush send --alert \"Server maintenance at 22:00\"

    # Target two devices on Apple only, with a badge
    imfpush send --alert hi --device-id d1 --device-id d2 --platform A --apns-badge 1

    # Print the request document without sending it
    imfpush send --alert hi --tag sports --dry-run

    # Use a specific configuration file and region
    imfpush --config ./push.toml send --alert hi --region sydney
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Replaces the layered config/ directory lookup with a single TOML file.
    /// The file must exist and be readable.
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        value_parser = super::validation::validate_config_file_path
    )]
    pub config: Option<PathBuf>,

    /// Environment whose `config/{env}.toml` layer is loaded
    #[arg(short, long, value_enum, global = true)]
    pub env: Option<Environment>,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a notification from flags and send it
    ///
    /// Without any targeting flag the notification is a broadcast. The
    /// process exits non-zero when the backend answers with a non-2xx
    /// status or the request cannot be made.
    Send(SendArgs),
}

/// Arguments of the `send` subcommand
#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// Notification text
    #[arg(long, value_parser = super::validation::validate_alert)]
    pub alert: String,

    /// URL opened when the notification is tapped
    #[arg(long)]
    pub url: Option<String>,

    /// Device id to address (repeatable)
    #[arg(long = "device-id", value_name = "ID")]
    pub device_ids: Vec<String>,

    /// User id to address (repeatable)
    #[arg(long = "user-id", value_name = "ID")]
    pub user_ids: Vec<String>,

    /// Tag whose subscribers are addressed (repeatable)
    #[arg(long = "tag", value_name = "NAME")]
    pub tag_names: Vec<String>,

    /// Platform code: A, G, WEB_CHROME, WEB_FIREFOX, WEB_SAFARI, APPEXT_CHROME (repeatable)
    #[arg(
        long = "platform",
        value_name = "CODE",
        value_parser = super::validation::validate_platform
    )]
    pub platforms: Vec<Platform>,

    /// APNs badge number
    #[arg(long, value_name = "N")]
    pub apns_badge: Option<i32>,

    /// APNs sound file
    #[arg(long, value_name = "SOUND")]
    pub apns_sound: Option<String>,

    /// GCM priority: default, min, low, max, high
    #[arg(
        long,
        value_name = "PRIORITY",
        value_parser = super::validation::validate_gcm_priority
    )]
    pub gcm_priority: Option<GcmPriority>,

    /// GCM sound file
    #[arg(long, value_name = "SOUND")]
    pub gcm_sound: Option<String>,

    /// GCM time to live in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        value_parser = super::validation::validate_time_to_live
    )]
    pub gcm_ttl: Option<i32>,

    /// JSON object delivered as custom payload to APNs and GCM
    #[arg(
        long,
        value_name = "JSON",
        value_parser = super::validation::validate_json_payload
    )]
    pub payload: Option<JsonValue>,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Print the request document instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Overrides for the `[push]` configuration section
#[derive(Args, Debug, Clone, Default)]
pub struct CredentialArgs {
    /// Application (tenant) id
    #[arg(long, env = "IMFPUSH_TENANT_ID")]
    pub tenant_id: Option<String>,

    /// Application secret sent in the appSecret header
    #[arg(long, env = "IMFPUSH_APP_SECRET", hide_env_values = true)]
    pub app_secret: Option<String>,

    /// Region: us-south, united-kingdom, sydney
    #[arg(long, value_parser = super::validation::validate_region)]
    pub region: Option<Region>,

    /// Endpoint overriding the regional host
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

impl Cli {
    /// Log level implied by `--verbose` / `--quiet`, if either was given
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}
