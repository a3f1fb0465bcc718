//! Browser push settings shared by Chrome and Firefox.
//!
//! Both browsers accept the same options, so one type serves the
//! `chromeWeb` and `firefoxWeb` blocks.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::models::presence;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPush {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_to_live: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<JsonValue>,
}

pub type ChromeWeb = WebPush;
pub type FirefoxWeb = WebPush;

impl WebPush {
    pub fn builder() -> WebPushBuilder {
        WebPushBuilder::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    pub fn time_to_live(&self) -> Option<i32> {
        self.time_to_live
    }

    pub fn payload(&self) -> Option<&JsonValue> {
        self.payload.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WebPushBuilder {
    title: Option<String>,
    icon_url: Option<String>,
    time_to_live: Option<i32>,
    payload: Option<JsonValue>,
}

impl WebPushBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    pub fn time_to_live(mut self, seconds: i32) -> Self {
        self.time_to_live = Some(seconds);
        self
    }

    pub fn payload(mut self, payload: JsonValue) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn payload_from<T: Serialize>(self, payload: &T) -> Result<Self, serde_json::Error> {
        Ok(self.payload(serde_json::to_value(payload)?))
    }

    pub fn build(self) -> Option<WebPush> {
        let web = WebPush {
            title: presence::text(self.title),
            icon_url: presence::text(self.icon_url),
            time_to_live: self.time_to_live,
            payload: presence::json(self.payload),
        };

        super::is_populated(&web).then_some(web)
    }
}
