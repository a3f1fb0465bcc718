//! Addressing: which devices, users, tags and platforms receive a notification.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::presence;
use crate::error::AppError;

/// Delivery platform, serialized as the backend's platform code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    #[serde(rename = "A")]
    Apple,
    #[serde(rename = "G")]
    Google,
    #[serde(rename = "WEB_CHROME")]
    WebChrome,
    #[serde(rename = "WEB_FIREFOX")]
    WebFirefox,
    #[serde(rename = "WEB_SAFARI")]
    WebSafari,
    #[serde(rename = "APPEXT_CHROME")]
    AppExtChrome,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Apple,
        Platform::Google,
        Platform::WebChrome,
        Platform::WebFirefox,
        Platform::WebSafari,
        Platform::AppExtChrome,
    ];

    /// Wire code understood by the push backend
    pub fn code(&self) -> &'static str {
        match self {
            Platform::Apple => "A",
            Platform::Google => "G",
            Platform::WebChrome => "WEB_CHROME",
            Platform::WebFirefox => "WEB_FIREFOX",
            Platform::WebSafari => "WEB_SAFARI",
            Platform::AppExtChrome => "APPEXT_CHROME",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    /// Accepts either the wire code or the enumerant name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "A" | "APPLE" => Ok(Platform::Apple),
            "G" | "GOOGLE" => Ok(Platform::Google),
            "WEB_CHROME" | "WEBCHROME" => Ok(Platform::WebChrome),
            "WEB_FIREFOX" | "WEBFIREFOX" => Ok(Platform::WebFirefox),
            "WEB_SAFARI" | "WEBSAFARI" => Ok(Platform::WebSafari),
            "APPEXT_CHROME" | "APPEXTCHROME" => Ok(Platform::AppExtChrome),
            _ => Err(AppError::validation(
                "platform",
                format!(
                    "Unknown platform '{}'. Valid values are: A, G, WEB_CHROME, WEB_FIREFOX, WEB_SAFARI, APPEXT_CHROME",
                    s
                ),
            )),
        }
    }
}

/// Recipients of a notification. Absent lists are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    device_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platforms: Option<Vec<Platform>>,
}

impl Target {
    pub fn builder() -> TargetBuilder {
        TargetBuilder::default()
    }

    pub fn device_ids(&self) -> Option<&[String]> {
        self.device_ids.as_deref()
    }

    pub fn user_ids(&self) -> Option<&[String]> {
        self.user_ids.as_deref()
    }

    pub fn tag_names(&self) -> Option<&[String]> {
        self.tag_names.as_deref()
    }

    pub fn platforms(&self) -> Option<&[Platform]> {
        self.platforms.as_deref()
    }
}

/// Builder for [`Target`]
///
/// List setters append, so repeated calls accumulate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TargetBuilder {
    device_ids: Option<Vec<String>>,
    user_ids: Option<Vec<String>>,
    tag_names: Option<Vec<String>>,
    platforms: Option<Vec<Platform>>,
}

impl TargetBuilder {
    pub fn device_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        presence::extend(&mut self.device_ids, ids);
        self
    }

    pub fn user_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        presence::extend(&mut self.user_ids, ids);
        self
    }

    pub fn tag_names<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        presence::extend(&mut self.tag_names, tags);
        self
    }

    pub fn platforms<I>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = Platform>,
    {
        self.platforms
            .get_or_insert_with(Vec::new)
            .extend(platforms);
        self
    }

    /// Returns `None` when no recipient field carries a value
    pub fn build(self) -> Option<Target> {
        let target = Target {
            device_ids: presence::list(self.device_ids),
            user_ids: presence::list(self.user_ids),
            tag_names: presence::list(self.tag_names),
            platforms: presence::list(self.platforms),
        };

        let empty = target.device_ids.is_none()
            && target.user_ids.is_none()
            && target.tag_names.is_none()
            && target.platforms.is_none();

        (!empty).then_some(target)
    }
}
