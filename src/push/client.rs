//! Push client with explicit initialization state.

use serde_json::Value as JsonValue;
use std::time::Instant;

use super::callback::{PushCallback, PushResponse};
use super::config::PushConfig;
use super::transport::{PushRequest, PushTransport, ReqwestTransport};
use crate::config::HttpConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::build_http_client;
use crate::models::Notification;

#[derive(Debug, Clone)]
enum ClientState {
    Uninitialized,
    Initialized(PushConfig),
}

/// Sends notifications to the push backend
///
/// A client starts uninitialized and must receive a [`PushConfig`] through
/// [`init`](Self::init) before it can send. It can be re-initialized and
/// reused for any number of sends.
///
/// # Example
/// ```ignore
/// let mut client = PushClient::new()?;
/// client.init(PushConfig::new("tenant", "secret", Region::UsSouth)?);
///
/// let response = client.send(&Notification::broadcast("hi")?).await?;
/// assert!(response.is_success());
/// ```
pub struct PushClient<T = ReqwestTransport> {
    state: ClientState,
    transport: T,
}

impl PushClient<ReqwestTransport> {
    /// Creates an uninitialized client using the default HTTP settings
    pub fn new() -> AppResult<Self> {
        Self::with_http_config(&HttpConfig::default())
    }

    /// Creates an uninitialized client whose HTTP client honours `http`
    pub fn with_http_config(http: &HttpConfig) -> AppResult<Self> {
        let client = build_http_client(http)?;
        Ok(Self::with_transport(ReqwestTransport::new(client)))
    }
}

impl<T: PushTransport> PushClient<T> {
    /// Creates an uninitialized client sending through `transport`
    pub fn with_transport(transport: T) -> Self {
        Self {
            state: ClientState::Uninitialized,
            transport,
        }
    }

    /// Sets (or replaces) the tenant configuration
    pub fn init(&mut self, config: PushConfig) {
        tracing::debug!(
            tenant_id = config.tenant_id(),
            base_url = config.base_url(),
            "Push client initialized"
        );
        self.state = ClientState::Initialized(config);
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, ClientState::Initialized(_))
    }

    pub fn config(&self) -> Option<&PushConfig> {
        match &self.state {
            ClientState::Initialized(config) => Some(config),
            ClientState::Uninitialized => None,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a notification
    ///
    /// # Errors
    /// * `AppError::NotInitialized` before [`init`](Self::init), without any request
    /// * `AppError::Transport` when no response was received
    ///
    /// Non-2xx responses are returned as `Ok`; check [`PushResponse::is_success`].
    pub async fn send(&self, notification: &Notification) -> AppResult<PushResponse> {
        let config = self.ready_config()?;
        let body = notification.to_json()?;
        self.dispatch(config, body).await
    }

    /// Sends an already assembled JSON document
    ///
    /// # Errors
    /// Same as [`send`](Self::send), plus a validation error when `document`
    /// is `null` or not a JSON object.
    pub async fn send_document(&self, document: &JsonValue) -> AppResult<PushResponse> {
        let config = self.ready_config()?;

        if !document.is_object() {
            return Err(AppError::validation(
                "notification",
                "Notification document must be a JSON object",
            ));
        }

        let body = serde_json::to_string(document)?;
        self.dispatch(config, body).await
    }

    /// Sends a notification and reports the outcome through `callback`
    ///
    /// Errors are never returned to the caller; every failure, including an
    /// uninitialized client, ends in [`PushCallback::on_failure`].
    pub async fn send_with_callback<C>(&self, notification: &Notification, callback: &mut C)
    where
        C: PushCallback + ?Sized,
    {
        match self.send(notification).await {
            Ok(response) if response.is_success() => {
                callback.on_success(response.status_code, &response.body);
            }
            Ok(response) => {
                callback.on_failure(Some(response.status_code), Some(&response.body), None);
            }
            Err(error) => {
                callback.on_failure(None, None, Some(&error));
            }
        }
    }

    fn ready_config(&self) -> AppResult<&PushConfig> {
        self.config().ok_or_else(|| {
            tracing::warn!("Attempted to send a push notification before init()");
            AppError::NotInitialized
        })
    }

    async fn dispatch(&self, config: &PushConfig, body: String) -> AppResult<PushResponse> {
        let request = PushRequest {
            url: config.messages_url(),
            app_secret: config.app_secret().to_string(),
            body,
        };

        tracing::debug!(
            url = %request.url,
            transport = self.transport.name(),
            bytes = request.body.len(),
            "Sending push notification"
        );

        let start = Instant::now();
        let result = self.transport.post(&request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(response) => {
                let response = PushResponse {
                    status_code: response.status_code,
                    body: response.body,
                    duration_ms,
                };

                if response.is_success() {
                    tracing::info!(
                        status = response.status_code,
                        duration_ms,
                        "Push notification accepted"
                    );
                } else {
                    tracing::warn!(
                        status = response.status_code,
                        duration_ms,
                        body = %response.body,
                        "Push notification rejected"
                    );
                }

                Ok(response)
            }
            Err(error) => {
                tracing::error!(error = %error, duration_ms, "Push notification request failed");
                Err(error)
            }
        }
    }
}
