//! The human-readable part of a notification.

use serde::Serialize;

use super::presence;
use crate::error::{AppError, AppResult};

/// Alert text shown to the user plus an optional link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    alert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Message {
    /// Shorthand for a message with only alert text
    pub fn new(alert: impl Into<String>) -> AppResult<Self> {
        Self::builder().alert(alert).build()
    }

    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    pub fn alert(&self) -> &str {
        &self.alert
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Builder for [`Message`]
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    alert: Option<String>,
    url: Option<String>,
}

impl MessageBuilder {
    pub fn alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builds the message
    ///
    /// # Errors
    /// Returns a validation error when the alert is unset or empty.
    pub fn build(self) -> AppResult<Message> {
        let alert = presence::text(self.alert)
            .ok_or_else(|| AppError::validation("alert", "Alert text is required"))?;

        Ok(Message {
            alert,
            url: presence::text(self.url),
        })
    }
}
