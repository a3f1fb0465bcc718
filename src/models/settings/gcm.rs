//! Google Cloud Messaging / Firebase Cloud Messaging settings.
//!
//! Besides the flat options, a GCM block may carry an expanded-notification
//! `style` and LED `lights`, each of which is itself optional and dropped
//! when empty.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::models::presence;

/// Android notification priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GcmPriority {
    Default,
    Min,
    Low,
    Max,
    High,
}

/// Lock-screen visibility of the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
    Private,
    Secret,
}

/// LED colors supported by the Android client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GcmLed {
    #[serde(rename = "BLACK")]
    Black,
    #[serde(rename = "DKGRAY")]
    DarkGray,
    #[serde(rename = "GRAY")]
    Gray,
    #[serde(rename = "LTGRAY")]
    LightGray,
    #[serde(rename = "WHITE")]
    White,
    #[serde(rename = "RED")]
    Red,
    #[serde(rename = "GREEN")]
    Green,
    #[serde(rename = "BLUE")]
    Blue,
    #[serde(rename = "YELLOW")]
    Yellow,
    #[serde(rename = "CYAN")]
    Cyan,
    #[serde(rename = "MAGENTA")]
    Magenta,
    #[serde(rename = "TRANSPARENT")]
    Transparent,
}

/// Expanded notification layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GcmStyleType {
    BigtextNotification,
    InboxNotification,
    PictureNotification,
}

/// Expanded notification content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GcmStyle {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<GcmStyleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<Vec<String>>,
}

impl GcmStyle {
    pub fn builder() -> GcmStyleBuilder {
        GcmStyleBuilder::default()
    }

    pub fn kind(&self) -> Option<GcmStyleType> {
        self.kind
    }

    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GcmStyleBuilder {
    kind: Option<GcmStyleType>,
    url: Option<String>,
    title: Option<String>,
    text: Option<String>,
    lines: Option<Vec<String>>,
}

impl GcmStyleBuilder {
    pub fn kind(mut self, kind: GcmStyleType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Picture URL for [`GcmStyleType::PictureNotification`]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Inbox lines for [`GcmStyleType::InboxNotification`]
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        presence::extend(&mut self.lines, lines);
        self
    }

    pub fn build(self) -> Option<GcmStyle> {
        let style = GcmStyle {
            kind: self.kind,
            url: presence::text(self.url),
            title: presence::text(self.title),
            text: presence::text(self.text),
            lines: presence::list(self.lines),
        };

        super::is_populated(&style).then_some(style)
    }
}

/// LED blink pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GcmLights {
    #[serde(skip_serializing_if = "Option::is_none")]
    led_argb: Option<GcmLed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    led_on_ms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    led_off_ms: Option<i32>,
}

impl GcmLights {
    pub fn builder() -> GcmLightsBuilder {
        GcmLightsBuilder::default()
    }

    pub fn led_argb(&self) -> Option<GcmLed> {
        self.led_argb
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GcmLightsBuilder {
    led_argb: Option<GcmLed>,
    led_on_ms: Option<i32>,
    led_off_ms: Option<i32>,
}

impl GcmLightsBuilder {
    pub fn led_argb(mut self, color: GcmLed) -> Self {
        self.led_argb = Some(color);
        self
    }

    pub fn led_on_ms(mut self, ms: i32) -> Self {
        self.led_on_ms = Some(ms);
        self
    }

    pub fn led_off_ms(mut self, ms: i32) -> Self {
        self.led_off_ms = Some(ms);
        self
    }

    pub fn build(self) -> Option<GcmLights> {
        if self.led_argb.is_none() && self.led_on_ms.is_none() && self.led_off_ms.is_none() {
            return None;
        }

        Some(GcmLights {
            led_argb: self.led_argb,
            led_on_ms: self.led_on_ms,
            led_off_ms: self.led_off_ms,
        })
    }
}

/// GCM/FCM-specific delivery options
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gcm {
    #[serde(skip_serializing_if = "Option::is_none")]
    collapse_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delay_while_idle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<GcmPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_to_live: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interactive_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<GcmStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lights: Option<GcmLights>,
}

impl Gcm {
    pub fn builder() -> GcmBuilder {
        GcmBuilder::default()
    }

    pub fn priority(&self) -> Option<GcmPriority> {
        self.priority
    }

    pub fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    pub fn time_to_live(&self) -> Option<i32> {
        self.time_to_live
    }

    pub fn payload(&self) -> Option<&JsonValue> {
        self.payload.as_ref()
    }

    pub fn style(&self) -> Option<&GcmStyle> {
        self.style.as_ref()
    }

    pub fn lights(&self) -> Option<&GcmLights> {
        self.lights.as_ref()
    }
}

/// Builder for [`Gcm`]
#[derive(Debug, Clone, Default)]
pub struct GcmBuilder {
    collapse_key: Option<String>,
    delay_while_idle: Option<bool>,
    payload: Option<JsonValue>,
    priority: Option<GcmPriority>,
    sound: Option<String>,
    time_to_live: Option<i32>,
    icon: Option<String>,
    visibility: Option<Visibility>,
    sync: Option<bool>,
    interactive_category: Option<String>,
    style: Option<GcmStyle>,
    lights: Option<GcmLights>,
}

impl GcmBuilder {
    pub fn collapse_key(mut self, key: impl Into<String>) -> Self {
        self.collapse_key = Some(key.into());
        self
    }

    pub fn delay_while_idle(mut self, delay: bool) -> Self {
        self.delay_while_idle = Some(delay);
        self
    }

    /// Custom JSON passed through to the device untouched
    pub fn payload(mut self, payload: JsonValue) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn payload_from<T: Serialize>(self, payload: &T) -> Result<Self, serde_json::Error> {
        Ok(self.payload(serde_json::to_value(payload)?))
    }

    pub fn priority(mut self, priority: GcmPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Seconds the message is kept while the device is offline
    pub fn time_to_live(mut self, seconds: i32) -> Self {
        self.time_to_live = Some(seconds);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = Some(sync);
        self
    }

    pub fn interactive_category(mut self, category: impl Into<String>) -> Self {
        self.interactive_category = Some(category.into());
        self
    }

    /// Accepts the result of [`GcmStyleBuilder::build`]; `None` clears the style
    pub fn style(mut self, style: Option<GcmStyle>) -> Self {
        self.style = style;
        self
    }

    /// Accepts the result of [`GcmLightsBuilder::build`]; `None` clears the lights
    pub fn lights(mut self, lights: Option<GcmLights>) -> Self {
        self.lights = lights;
        self
    }

    /// Returns `None` when nothing was set
    pub fn build(self) -> Option<Gcm> {
        let gcm = Gcm {
            collapse_key: presence::text(self.collapse_key),
            delay_while_idle: self.delay_while_idle,
            payload: presence::json(self.payload),
            priority: self.priority,
            sound: presence::text(self.sound),
            time_to_live: self.time_to_live,
            icon: presence::text(self.icon),
            visibility: self.visibility,
            sync: self.sync,
            interactive_category: presence::text(self.interactive_category),
            style: self.style,
            lights: self.lights,
        };

        super::is_populated(&gcm).then_some(gcm)
    }
}
