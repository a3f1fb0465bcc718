//! Per-channel delivery settings.
//!
//! Each channel block is optional and built independently; a channel
//! builder returns `None` when none of its fields carry a value, and
//! [`SettingsBuilder::build`] returns `None` when every channel is absent.
//! Empty groups therefore never appear as `{}` in the request body.
//!
//! # Example
//! ```ignore
//! let settings = Settings::builder()
//!     .apns(Apns::builder().badge(1).sound("default").build())
//!     .gcm(Gcm::builder().priority(GcmPriority::High).build())
//!     .build();
//! ```

mod apns;
mod chrome_app_ext;
mod gcm;
mod safari_web;
mod web;

pub use apns::{Apns, ApnsBuilder, ApnsType};
pub use chrome_app_ext::{ChromeAppExt, ChromeAppExtBuilder};
pub use gcm::{
    Gcm, GcmBuilder, GcmLed, GcmLights, GcmLightsBuilder, GcmPriority, GcmStyle, GcmStyleBuilder,
    GcmStyleType, Visibility,
};
pub use safari_web::{SafariWeb, SafariWebBuilder};
pub use web::{ChromeWeb, FirefoxWeb, WebPush, WebPushBuilder};

use serde::Serialize;
use serde_json::Value as JsonValue;

/// True when `value` serializes to a non-empty JSON object.
///
/// Every settings struct skips `None` fields, so an empty object means no
/// field was set.
pub(crate) fn is_populated<T: Serialize>(value: &T) -> bool {
    matches!(serde_json::to_value(value), Ok(JsonValue::Object(map)) if !map.is_empty())
}

/// Channel settings keyed by platform
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    apns: Option<Apns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gcm: Option<Gcm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chrome_web: Option<ChromeWeb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    firefox_web: Option<FirefoxWeb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    safari_web: Option<SafariWeb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chrome_app_ext: Option<ChromeAppExt>,
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    pub fn apns(&self) -> Option<&Apns> {
        self.apns.as_ref()
    }

    pub fn gcm(&self) -> Option<&Gcm> {
        self.gcm.as_ref()
    }

    pub fn chrome_web(&self) -> Option<&ChromeWeb> {
        self.chrome_web.as_ref()
    }

    pub fn firefox_web(&self) -> Option<&FirefoxWeb> {
        self.firefox_web.as_ref()
    }

    pub fn safari_web(&self) -> Option<&SafariWeb> {
        self.safari_web.as_ref()
    }

    pub fn chrome_app_ext(&self) -> Option<&ChromeAppExt> {
        self.chrome_app_ext.as_ref()
    }
}

/// Builder for [`Settings`]
///
/// Setters take the `Option` returned by the channel builders so an empty
/// channel can be passed straight through.
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    apns: Option<Apns>,
    gcm: Option<Gcm>,
    chrome_web: Option<ChromeWeb>,
    firefox_web: Option<FirefoxWeb>,
    safari_web: Option<SafariWeb>,
    chrome_app_ext: Option<ChromeAppExt>,
}

impl SettingsBuilder {
    pub fn apns(mut self, apns: Option<Apns>) -> Self {
        self.apns = apns;
        self
    }

    pub fn gcm(mut self, gcm: Option<Gcm>) -> Self {
        self.gcm = gcm;
        self
    }

    pub fn chrome_web(mut self, chrome_web: Option<ChromeWeb>) -> Self {
        self.chrome_web = chrome_web;
        self
    }

    pub fn firefox_web(mut self, firefox_web: Option<FirefoxWeb>) -> Self {
        self.firefox_web = firefox_web;
        self
    }

    pub fn safari_web(mut self, safari_web: Option<SafariWeb>) -> Self {
        self.safari_web = safari_web;
        self
    }

    pub fn chrome_app_ext(mut self, chrome_app_ext: Option<ChromeAppExt>) -> Self {
        self.chrome_app_ext = chrome_app_ext;
        self
    }

    /// Returns `None` when no channel is present
    pub fn build(self) -> Option<Settings> {
        let settings = Settings {
            apns: self.apns,
            gcm: self.gcm,
            chrome_web: self.chrome_web,
            firefox_web: self.firefox_web,
            safari_web: self.safari_web,
            chrome_app_ext: self.chrome_app_ext,
        };

        is_populated(&settings).then_some(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_empty_settings_is_absent() {
        assert!(Settings::builder().build().is_none());

        let settings = Settings::builder()
            .apns(Apns::builder().sound("").build())
            .gcm(Gcm::builder().build())
            .chrome_web(WebPush::builder().title("").build())
            .firefox_web(None)
            .safari_web(SafariWeb::builder().build())
            .chrome_app_ext(ChromeAppExt::builder().build())
            .build();
        assert!(settings.is_none());
    }

    #[test]
    fn test_only_present_channels_serialized() {
        let settings = Settings::builder()
            .gcm(Gcm::builder().sound("ping").build())
            .safari_web(SafariWeb::builder().action("Open").build())
            .build()
            .unwrap();

        assert!(settings.apns().is_none());
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"gcm": {"sound": "ping"}, "safariWeb": {"action": "Open"}})
        );
    }

    #[test]
    fn test_chrome_and_firefox_are_independent() {
        let settings = Settings::builder()
            .chrome_web(WebPush::builder().title("chrome").time_to_live(10).build())
            .firefox_web(WebPush::builder().title("firefox").build())
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({
                "chromeWeb": {"title": "chrome", "timeToLive": 10},
                "firefoxWeb": {"title": "firefox"}
            })
        );
    }

    proptest! {
        #[test]
        fn prop_serialized_keys_match_present_channels(mask in 0u8..64) {
            let on = |bit: u8| mask & (1 << bit) != 0;
            let settings = Settings::builder()
                .apns(Apns::builder().badge(1).build().filter(|_| on(0)))
                .gcm(Gcm::builder().sound("s").build().filter(|_| on(1)))
                .chrome_web(WebPush::builder().title("c").build().filter(|_| on(2)))
                .firefox_web(WebPush::builder().title("f").build().filter(|_| on(3)))
                .safari_web(SafariWeb::builder().action("a").build().filter(|_| on(4)))
                .chrome_app_ext(ChromeAppExt::builder().title("e").build().filter(|_| on(5)))
                .build();

            if mask == 0 {
                prop_assert!(settings.is_none());
            } else {
                let value = serde_json::to_value(settings.unwrap()).unwrap();
                let keys = ["apns", "gcm", "chromeWeb", "firefoxWeb", "safariWeb", "chromeAppExt"];
                for (bit, key) in keys.iter().enumerate() {
                    prop_assert_eq!(value.get(*key).is_some(), on(bit as u8));
                }
            }
        }
    }
}
