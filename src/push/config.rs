//! Connection parameters for one push tenant.

use reqwest::Url;
use std::fmt;

use super::region::Region;
use crate::error::{AppError, AppResult};

const MESSAGES_PATH: &str = "imfpush/v1/apps";

/// Tenant credentials and the endpoint they are sent to
///
/// Owned by a [`PushClient`](super::PushClient); there is no process-wide
/// configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct PushConfig {
    tenant_id: String,
    app_secret: String,
    base_url: String,
}

impl PushConfig {
    /// Creates a configuration for the given region
    ///
    /// # Errors
    /// Returns a validation error when `tenant_id` or `app_secret` is empty.
    pub fn new(
        tenant_id: impl Into<String>,
        app_secret: impl Into<String>,
        region: Region,
    ) -> AppResult<Self> {
        let tenant_id = tenant_id.into();
        let app_secret = app_secret.into();

        if tenant_id.trim().is_empty() {
            return Err(AppError::validation("tenant_id", "Tenant id cannot be empty"));
        }
        if app_secret.is_empty() {
            return Err(AppError::validation("app_secret", "App secret cannot be empty"));
        }

        Ok(Self {
            tenant_id,
            app_secret,
            base_url: region.base_url(),
        })
    }

    /// Replaces the regional host with `base_url` (scheme, host and port only)
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> AppResult<Self> {
        let raw = base_url.as_ref();
        let url = Url::parse(raw).map_err(|_| {
            AppError::validation("base_url", format!("Invalid URL format: {}", raw))
        })?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(AppError::validation(
                "base_url",
                "URL must use http or https protocol",
            ));
        }

        self.base_url = raw.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/imfpush/v1/apps/<tenantId>/messages`
    pub fn messages_url(&self) -> String {
        format!("{}/{}/{}/messages", self.base_url, MESSAGES_PATH, self.tenant_id)
    }
}

impl fmt::Debug for PushConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushConfig")
            .field("tenant_id", &self.tenant_id)
            .field("app_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
