//! Configuration loader for imfpush-rs
//!
//! Builds an [`AppConfig`] from layered TOML files and `IMFPUSH_*`
//! environment variables.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::AppConfig;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "IMFPUSH_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "IMFPUSH_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "IMFPUSH";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Loads configuration with the following precedence (lowest to highest):
/// 1. `default.toml`
/// 2. `{environment}.toml`
/// 3. `local.toml`
/// 4. `IMFPUSH_*` environment variables
///
/// All files are optional, since the CLI can run from flags and environment
/// alone. When a single file is selected (`IMFPUSH_CONFIG_FILE` or
/// [`ConfigLoader::with_file`]) it replaces the three layers and must exist.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `IMFPUSH_CONFIG_DIR`, `IMFPUSH_CONFIG_FILE` and
    /// `IMFPUSH_APP_ENV`
    ///
    /// # Errors
    ///
    /// Returns an error if both `IMFPUSH_CONFIG_DIR` and `IMFPUSH_CONFIG_FILE`
    /// are set.
    pub fn new() -> Result<Self, ConfigError> {
        let dir_from_env = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && dir_from_env.is_some() {
            return Err(ConfigError::mutual_exclusivity(
                "IMFPUSH_CONFIG_DIR and IMFPUSH_CONFIG_FILE cannot both be set. \
                 Use IMFPUSH_CONFIG_DIR for layered configuration or \
                 IMFPUSH_CONFIG_FILE for a single configuration file.",
            ));
        }

        Ok(Self {
            config_dir: dir_from_env
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Load only `path` (plus environment variables)
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the environment used to pick `{environment}.toml`
    pub fn environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load, deserialize and validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the selected single file does not exist
    /// - a file cannot be parsed
    /// - validation fails
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let config = self.build_config()?;
        let settings: AppConfig = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        tracing::debug!(
            environment = %self.environment,
            config_file = ?self.config_file,
            "Configuration loaded"
        );

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match &self.config_file {
            Some(config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.add_layered_sources(builder)?,
        };

        // IMFPUSH_PUSH__TENANT_ID -> push.tenant_id
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn add_layered_sources(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let layers = [
            "default.toml".to_string(),
            format!("{}.toml", self.environment.as_str()),
            "local.toml".to_string(),
        ];

        layers.iter().try_fold(builder, |builder, name| {
            Self::add_file_source(builder, &self.config_dir.join(name), false)
        })
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(required)))
    }
}

/// Tests touching process environment variables run one at a time
#[cfg(test)]
pub(crate) static TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Sets/removes variables and restores them on drop
    struct EnvGuard {
        saved: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            let mut guard = Self { saved: Vec::new() };
            for key in [
                CONFIG_DIR_ENV,
                CONFIG_FILE_ENV,
                AppEnvironment::ENV_VAR,
                "IMFPUSH_PUSH__TENANT_ID",
                "IMFPUSH_PUSH__APP_SECRET",
                "IMFPUSH_PUSH__REGION",
                "IMFPUSH_HTTP__TIMEOUT_SECS",
                "IMFPUSH_LOGGER__COLORED",
            ] {
                guard.remove(key);
            }
            guard
        }

        fn set(&mut self, key: &str, value: &str) {
            self.saved.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.saved.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in self.saved.iter().rev() {
                unsafe {
                    match value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_new_defaults() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::new();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment, AppEnvironment::Development);
    }

    #[test]
    fn test_mutual_exclusivity_error() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.set(CONFIG_DIR_ENV, "/etc/imfpush");
        env.set(CONFIG_FILE_ENV, "/etc/imfpush/push.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains(CONFIG_DIR_ENV));
                assert!(msg.contains(CONFIG_FILE_ENV));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_without_any_files() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let config = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_layers_override_in_order() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[
            (
                "default.toml",
                "[push]\ntenant_id = \"base\"\nregion = \"us-south\"\n[logger]\nlevel = \"warn\"\n",
            ),
            ("production.toml", "[push]\nregion = \"sydney\"\n"),
            ("local.toml", "[logger]\nformat = \"compact\"\n"),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set(AppEnvironment::ENV_VAR, "production");

        let config = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(config.push.tenant_id, "base");
        assert_eq!(config.push.region, "sydney");
        assert_eq!(config.logger.level, "warn");
        assert_eq!(config.logger.format, "compact");
    }

    #[test]
    fn test_env_vars_take_precedence() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[(
            "default.toml",
            "[push]\ntenant_id = \"from-file\"\napp_secret = \"file-secret\"\n",
        )]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("IMFPUSH_PUSH__TENANT_ID", "from-env");
        env.set("IMFPUSH_PUSH__REGION", "united-kingdom");

        let config = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(config.push.tenant_id, "from-env");
        assert_eq!(config.push.app_secret, "file-secret");
        assert_eq!(config.push.region, "united-kingdom");
    }

    #[test]
    fn test_env_values_stay_strings_until_deserialized() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("IMFPUSH_PUSH__TENANT_ID", "007");
        env.set("IMFPUSH_PUSH__APP_SECRET", "1e3");
        env.set("IMFPUSH_HTTP__TIMEOUT_SECS", "15");
        env.set("IMFPUSH_LOGGER__COLORED", "false");

        let config = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(config.push.tenant_id, "007");
        assert_eq!(config.push.app_secret, "1e3");
        assert_eq!(config.http.timeout_secs, Some(15));
        assert!(!config.logger.colored);
    }

    #[test]
    fn test_single_file_must_exist() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::new();

        let result = ConfigLoader::with_file("/definitely/missing/imfpush.toml").load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_single_file_skips_layers() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("push.toml", "[http]\ntimeout_secs = 15\n")]);

        let config = ConfigLoader::with_file(temp_dir.path().join("push.toml"))
            .load()
            .unwrap();
        assert_eq!(config.http.timeout_secs, Some(15));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("push.toml", "[push]\nregion = \"atlantis\"\n")]);

        let result = ConfigLoader::with_file(temp_dir.path().join("push.toml")).load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
