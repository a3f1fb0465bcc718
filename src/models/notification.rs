//! The top-level push document.

use serde::Serialize;
use serde_json::Value as JsonValue;

use super::message::Message;
use super::settings::Settings;
use super::target::Target;
use crate::error::{AppError, AppResult};

/// Message, optional recipients and optional channel settings
///
/// Serializes to `{"message": {...}, "target": {...}, "settings": {...}}`
/// with absent groups omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    message: Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<Target>,
    #[serde(skip_serializing_if = "Option::is_none")]
    settings: Option<Settings>,
}

impl Notification {
    pub fn builder() -> NotificationBuilder {
        NotificationBuilder::default()
    }

    /// A notification broadcast to every registered device
    pub fn broadcast(alert: impl Into<String>) -> AppResult<Self> {
        Self::builder().message(Message::new(alert)?).build()
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn to_value(&self) -> AppResult<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }

    /// Compact JSON body as sent to the backend
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for [`Notification`]
#[derive(Debug, Clone, Default)]
pub struct NotificationBuilder {
    message: Option<Message>,
    target: Option<Target>,
    settings: Option<Settings>,
}

impl NotificationBuilder {
    pub fn message(mut self, message: Message) -> Self {
        self.message = Some(message);
        self
    }

    /// Accepts the result of [`TargetBuilder::build`](super::TargetBuilder::build)
    pub fn target(mut self, target: Option<Target>) -> Self {
        self.target = target;
        self
    }

    /// Accepts the result of [`SettingsBuilder::build`](super::SettingsBuilder::build)
    pub fn settings(mut self, settings: Option<Settings>) -> Self {
        self.settings = settings;
        self
    }

    /// # Errors
    /// Returns a validation error when no message was supplied.
    pub fn build(self) -> AppResult<Notification> {
        let message = self
            .message
            .ok_or_else(|| AppError::validation("message", "A notification requires a message"))?;

        Ok(Notification {
            message,
            target: self.target,
            settings: self.settings,
        })
    }
}
