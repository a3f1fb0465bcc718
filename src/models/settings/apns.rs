//! Apple Push Notification service settings.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::models::presence;

/// Kind of APNs notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApnsType {
    Default,
    Mixed,
    Silent,
}

/// APNs-specific delivery options
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Apns {
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interactive_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ios_action_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sound: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<ApnsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title_loc_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loc_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    launch_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title_loc_args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loc_args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment_url: Option<String>,
}

impl Apns {
    pub fn builder() -> ApnsBuilder {
        ApnsBuilder::default()
    }

    pub fn badge(&self) -> Option<i32> {
        self.badge
    }

    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    pub fn kind(&self) -> Option<ApnsType> {
        self.kind
    }

    pub fn payload(&self) -> Option<&JsonValue> {
        self.payload.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Builder for [`Apns`]
#[derive(Debug, Clone, Default)]
pub struct ApnsBuilder {
    badge: Option<i32>,
    interactive_category: Option<String>,
    ios_action_key: Option<String>,
    payload: Option<JsonValue>,
    sound: Option<String>,
    kind: Option<ApnsType>,
    title_loc_key: Option<String>,
    loc_key: Option<String>,
    launch_image: Option<String>,
    title_loc_args: Option<Vec<String>>,
    loc_args: Option<Vec<String>>,
    title: Option<String>,
    subtitle: Option<String>,
    attachment_url: Option<String>,
}

impl ApnsBuilder {
    pub fn badge(mut self, badge: i32) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn interactive_category(mut self, category: impl Into<String>) -> Self {
        self.interactive_category = Some(category.into());
        self
    }

    pub fn ios_action_key(mut self, key: impl Into<String>) -> Self {
        self.ios_action_key = Some(key.into());
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

    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    pub fn kind(mut self, kind: ApnsType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn title_loc_key(mut self, key: impl Into<String>) -> Self {
        self.title_loc_key = Some(key.into());
        self
    }

    pub fn loc_key(mut self, key: impl Into<String>) -> Self {
        self.loc_key = Some(key.into());
        self
    }

    pub fn launch_image(mut self, image: impl Into<String>) -> Self {
        self.launch_image = Some(image.into());
        self
    }

    pub fn title_loc_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        presence::extend(&mut self.title_loc_args, args);
        self
    }

    pub fn loc_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        presence::extend(&mut self.loc_args, args);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn attachment_url(mut self, url: impl Into<String>) -> Self {
        self.attachment_url = Some(url.into());
        self
    }

    /// Returns `None` when nothing was set
    pub fn build(self) -> Option<Apns> {
        let apns = Apns {
            badge: self.badge,
            interactive_category: presence::text(self.interactive_category),
            ios_action_key: presence::text(self.ios_action_key),
            payload: presence::json(self.payload),
            sound: presence::text(self.sound),
            kind: self.kind,
            title_loc_key: presence::text(self.title_loc_key),
            loc_key: presence::text(self.loc_key),
            launch_image: presence::text(self.launch_image),
            title_loc_args: presence::list(self.title_loc_args),
            loc_args: presence::list(self.loc_args),
            title: presence::text(self.title),
            subtitle: presence::text(self.subtitle),
            attachment_url: presence::text(self.attachment_url),
        };

        super::is_populated(&apns).then_some(apns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_apns_is_absent() {
        let apns = Apns::builder()
            .sound("")
            .title("")
            .payload(json!({}))
            .loc_args(Vec::<String>::new())
            .build();
        assert!(apns.is_none());
    }

    #[test]
    fn test_apns_serialization() {
        let apns = Apns::builder()
            .badge(3)
            .sound("chime.aiff")
            .kind(ApnsType::Mixed)
            .ios_action_key("View")
            .loc_args(["a", "b"])
            .payload(json!({"orderId": 42}))
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&apns).unwrap(),
            json!({
                "badge": 3,
                "iosActionKey": "View",
                "payload": {"orderId": 42},
                "sound": "chime.aiff",
                "type": "MIXED",
                "locArgs": ["a", "b"]
            })
        );
    }

    #[test]
    fn test_zero_badge_is_kept() {
        let apns = Apns::builder().badge(0).build().unwrap();
        assert_eq!(apns.badge(), Some(0));
    }
}
