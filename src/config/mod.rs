//! Configuration management for imfpush-rs
//!
//! Layered loading from TOML files and `IMFPUSH_*` environment variables.
//! See [`ConfigLoader`] for precedence rules.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{AppConfig, HttpConfig, LoggerSettings, PushSettings};
