//! Push document model.
//!
//! Immutable value types with fluent builders. [`Notification`] is the
//! top-level document; [`Message`] is required, [`Target`] and
//! [`Settings`] are optional and omitted entirely when empty.

mod message;
mod notification;
mod presence;
pub mod settings;
mod target;

pub use message::{Message, MessageBuilder};
pub use notification::{Notification, NotificationBuilder};
pub use settings::{
    Apns, ApnsBuilder, ApnsType, ChromeAppExt, ChromeAppExtBuilder, ChromeWeb, FirefoxWeb, Gcm,
    GcmBuilder, GcmLed, GcmLights, GcmLightsBuilder, GcmPriority, GcmStyle, GcmStyleBuilder,
    GcmStyleType, SafariWeb, SafariWebBuilder, Settings, SettingsBuilder, Visibility, WebPush,
    WebPushBuilder,
};
pub use target::{Platform, Target, TargetBuilder};
