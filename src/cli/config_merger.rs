//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands, CredentialArgs};
use crate::config::error::ConfigError;
use crate::config::{AppConfig, ConfigLoader};

/// Applies CLI overrides on top of file and environment configuration
///
/// Precedence, highest first: CLI flags, `IMFPUSH_*` environment variables,
/// configuration files, built-in defaults.
pub struct ConfigurationMerger {
    base_config: AppConfig,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: AppConfig) -> Self {
        Self { base_config }
    }

    /// Load the base configuration selected by `--config` and `--env`
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match &cli.config {
            Some(path) => ConfigLoader::with_file(path),
            None => ConfigLoader::new()?,
        };
        let loader = match cli.env {
            Some(env) => loader.environment(env.into()),
            None => loader,
        };

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// Returns a new, validated [`AppConfig`]; the base is left untouched.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<AppConfig, ConfigError> {
        let mut config = self.base_config.clone();

        self.apply_global_overrides(&mut config, cli);

        match &cli.command {
            Commands::Send(args) => self.apply_credential_overrides(&mut config, &args.credentials),
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(&self, config: &mut AppConfig, cli: &Cli) {
        if let Some(level) = cli.log_level_override() {
            config.logger.level = level.to_string();
        }
    }

    fn apply_credential_overrides(&self, config: &mut AppConfig, credentials: &CredentialArgs) {
        if let Some(tenant_id) = &credentials.tenant_id {
            config.push.tenant_id = tenant_id.clone();
        }
        if let Some(app_secret) = &credentials.app_secret {
            config.push.app_secret = app_secret.clone();
        }
        if let Some(region) = credentials.region {
            config.push.region = region.as_str().to_string();
        }
        if let Some(base_url) = &credentials.base_url {
            config.push.base_url = Some(base_url.clone());
        }
    }

    /// Get the base configuration
    pub fn base_config(&self) -> &AppConfig {
        &self.base_config
    }
}
