//! Safari website push settings.

use serde::Serialize;

use crate::models::presence;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafariWeb {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Values substituted into the website's URL format string
    #[serde(skip_serializing_if = "Option::is_none")]
    url_args: Option<Vec<String>>,
    /// Label of the notification's action button
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
}

impl SafariWeb {
    pub fn builder() -> SafariWebBuilder {
        SafariWebBuilder::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url_args(&self) -> Option<&[String]> {
        self.url_args.as_deref()
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SafariWebBuilder {
    title: Option<String>,
    url_args: Option<Vec<String>>,
    action: Option<String>,
}

impl SafariWebBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        presence::extend(&mut self.url_args, args);
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn build(self) -> Option<SafariWeb> {
        let safari = SafariWeb {
            title: presence::text(self.title),
            url_args: presence::list(self.url_args),
            action: presence::text(self.action),
        };

        super::is_populated(&safari).then_some(safari)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safari_serialization() {
        let safari = SafariWeb::builder()
            .title("Flight update")
            .url_args(["boarding", "LH123"])
            .action("View")
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&safari).unwrap(),
            json!({"title": "Flight update", "urlArgs": ["boarding", "LH123"], "action": "View"})
        );
    }

    #[test]
    fn test_empty_safari_is_absent() {
        assert!(
            SafariWeb::builder()
                .url_args(Vec::<String>::new())
                .action("")
                .build()
                .is_none()
        );
    }
}
