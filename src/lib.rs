//! imfpush-rs
//!
//! Client SDK for the IMF push notification service. Build a
//! [`Notification`] with the fluent builders in [`models`], then hand it to a
//! [`PushClient`] initialised with a [`PushConfig`]:
//!
//! ```no_run
//! use imfpush_rs::{Notification, PushClient, PushConfig, Region};
//!
//! # async fn run() -> imfpush_rs::AppResult<()> {
//! let mut client = PushClient::new()?;
//! client.init(PushConfig::new("tenant", "secret", Region::UsSouth)?);
//!
//! let response = client.send(&Notification::broadcast("Hello")?).await?;
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod push;

pub use error::{AppError, AppResult};
pub use models::{Message, Notification, Platform, Settings, Target};
pub use push::{PushCallback, PushClient, PushConfig, PushResponse, Region};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
