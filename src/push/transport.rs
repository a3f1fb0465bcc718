//! HTTP transport seam.
//!
//! [`PushTransport`] performs exactly one POST per call. [`ReqwestTransport`]
//! is the production implementation; tests substitute their own.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::{AppError, AppResult};

/// Name of the header carrying the tenant secret
pub const APP_SECRET_HEADER: &str = "appSecret";

/// A fully prepared push request
#[derive(Clone, PartialEq, Eq)]
pub struct PushRequest {
    pub url: String,
    pub app_secret: String,
    /// Serialized JSON document
    pub body: String,
}

impl std::fmt::Debug for PushRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushRequest")
            .field("url", &self.url)
            .field("app_secret", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

/// Raw status and body returned by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status_code: u16,
    pub body: String,
}

/// Sends prepared push requests
///
/// Implementations must not retry; a failure is reported once.
#[async_trait]
pub trait PushTransport: Send + Sync {
    /// POSTs `request.body` with `Content-Type: application/json` and the
    /// `appSecret` header
    ///
    /// # Returns
    /// The HTTP status and body for any response, or `AppError::Transport`
    /// when no response was received
    async fn post(&self, request: &PushRequest) -> AppResult<TransportResponse>;

    /// Returns the transport name for logging/debugging
    fn name(&self) -> &'static str;
}

/// [`PushTransport`] backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PushTransport for ReqwestTransport {
    async fn post(&self, request: &PushRequest) -> AppResult<TransportResponse> {
        let transport_error = |source| AppError::Transport {
            url: request.url.clone(),
            source,
        };

        let response = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, "application/json")
            .header(APP_SECRET_HEADER, &request.app_secret)
            .body(request.body.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        Ok(TransportResponse { status_code, body })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
