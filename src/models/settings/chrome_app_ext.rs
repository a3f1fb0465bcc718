//! Chrome app and extension push settings.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::models::presence;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeAppExt {
    #[serde(skip_serializing_if = "Option::is_none")]
    collapse_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delay_while_idle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_to_live: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<JsonValue>,
}

impl ChromeAppExt {
    pub fn builder() -> ChromeAppExtBuilder {
        ChromeAppExtBuilder::default()
    }

    pub fn collapse_key(&self) -> Option<&str> {
        self.collapse_key.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn time_to_live(&self) -> Option<i32> {
        self.time_to_live
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChromeAppExtBuilder {
    collapse_key: Option<String>,
    delay_while_idle: Option<bool>,
    title: Option<String>,
    icon_url: Option<String>,
    time_to_live: Option<i32>,
    payload: Option<JsonValue>,
}

impl ChromeAppExtBuilder {
    pub fn collapse_key(mut self, key: impl Into<String>) -> Self {
        self.collapse_key = Some(key.into());
        self
    }

    pub fn delay_while_idle(mut self, delay: bool) -> Self {
        self.delay_while_idle = Some(delay);
        self
    }

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

    pub fn build(self) -> Option<ChromeAppExt> {
        let ext = ChromeAppExt {
            collapse_key: presence::text(self.collapse_key),
            delay_while_idle: self.delay_while_idle,
            title: presence::text(self.title),
            icon_url: presence::text(self.icon_url),
            time_to_live: self.time_to_live,
            payload: presence::json(self.payload),
        };

        super::is_populated(&ext).then_some(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chrome_app_ext_serialization() {
        let ext = ChromeAppExt::builder()
            .collapse_key("sync")
            .delay_while_idle(true)
            .icon_url("https://example.com/icon.png")
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            json!({
                "collapseKey": "sync",
                "delayWhileIdle": true,
                "iconUrl": "https://example.com/icon.png"
            })
        );
    }

    #[test]
    fn test_empty_chrome_app_ext_is_absent() {
        assert!(ChromeAppExt::builder().title("").build().is_none());
    }
}
