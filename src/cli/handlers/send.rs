//! Send command handler
//!
//! Turns `send` flags into a [`Notification`] and either renders it
//! (dry run) or delivers it with a [`PushClient`].

use crate::cli::parser::SendArgs;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::models::{Apns, Gcm, Message, Notification, Settings, Target};
use crate::push::{PushClient, PushResponse, PushTransport};

/// What the send command produced
#[derive(Debug)]
pub enum SendOutcome {
    /// Pretty-printed request document; nothing was sent
    DryRun(String),
    /// The backend answered (any status)
    Delivered(PushResponse),
}

/// Handler for the send command
pub struct SendCommandHandler {
    config: AppConfig,
}

impl SendCommandHandler {
    /// Create a new send command handler
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Execute the send command
    ///
    /// # Errors
    /// - Validation errors from the notification builders
    /// - Configuration errors for missing or invalid credentials
    /// - Transport errors when the backend cannot be reached
    pub async fn execute(&self, args: &SendArgs) -> AppResult<SendOutcome> {
        let notification = Self::build_notification(args)?;

        if args.dry_run {
            return Ok(SendOutcome::DryRun(notification.to_json_pretty()?));
        }

        let mut client = PushClient::with_http_config(&self.config.http)?;
        self.deliver(&mut client, &notification).await
    }

    /// Initialise `client` from the push settings and send `notification`
    pub async fn deliver<T: PushTransport>(
        &self,
        client: &mut PushClient<T>,
        notification: &Notification,
    ) -> AppResult<SendOutcome> {
        client.init(self.config.push.to_push_config()?);
        let response = client.send(notification).await?;
        Ok(SendOutcome::Delivered(response))
    }

    /// Assemble the request document from command-line flags
    pub fn build_notification(args: &SendArgs) -> AppResult<Notification> {
        let mut message = Message::builder().alert(args.alert.as_str());
        if let Some(url) = &args.url {
            message = message.url(url.as_str());
        }

        let target = Target::builder()
            .device_ids(args.device_ids.iter().cloned())
            .user_ids(args.user_ids.iter().cloned())
            .tag_names(args.tag_names.iter().cloned())
            .platforms(args.platforms.iter().copied())
            .build();

        let mut apns = Apns::builder();
        if let Some(badge) = args.apns_badge {
            apns = apns.badge(badge);
        }
        if let Some(sound) = &args.apns_sound {
            apns = apns.sound(sound.as_str());
        }

        let mut gcm = Gcm::builder();
        if let Some(priority) = args.gcm_priority {
            gcm = gcm.priority(priority);
        }
        if let Some(sound) = &args.gcm_sound {
            gcm = gcm.sound(sound.as_str());
        }
        if let Some(ttl) = args.gcm_ttl {
            gcm = gcm.time_to_live(ttl);
        }

        if let Some(payload) = &args.payload {
            apns = apns.payload(payload.clone());
            gcm = gcm.payload(payload.clone());
        }

        let settings = Settings::builder()
            .apns(apns.build())
            .gcm(gcm.build())
            .build();

        Notification::builder()
            .message(message.build()?)
            .target(target)
            .settings(settings)
            .build()
    }

    /// Get the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::{Cli, Commands};
    use crate::error::AppError;
    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn send_args(args: &[&str]) -> SendArgs {
        let cli = Cli::try_parse_from(
            ["imfpush", "send"].into_iter().chain(args.iter().copied()),
        )
        .unwrap();
        match cli.command {
            Commands::Send(args) => args,
        }
    }

    fn config_for(base_url: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.push.tenant_id = "T".to_string();
        config.push.app_secret = "S".to_string();
        config.push.base_url = Some(base_url.to_string());
        config
    }

    #[test]
    fn test_broadcast_document() {
        let notification = SendCommandHandler::build_notification(&send_args(&["--alert", "hi"])).unwrap();
        assert_eq!(notification.to_value().unwrap(), json!({"message": {"alert": "hi"}}));
    }

    #[test]
    fn test_full_document() {
        let args = send_args(&[
            "--alert",
            "hello",
            "--url",
            "u",
            "--device-id",
            "d1",
            "--platform",
            "G",
            "--apns-sound",
            "ping.aiff",
            "--gcm-priority",
            "high",
            "--gcm-ttl",
            "30",
            "--payload",
            r#"{"k":1}"#,
        ]);
        let notification = SendCommandHandler::build_notification(&args).unwrap();

        assert_eq!(
            notification.to_value().unwrap(),
            json!({
                "message": {"alert": "hello", "url": "u"},
                "target": {"deviceIds": ["d1"], "platforms": ["G"]},
                "settings": {
                    "apns": {"payload": {"k": 1}, "sound": "ping.aiff"},
                    "gcm": {"payload": {"k": 1}, "priority": "HIGH", "timeToLive": 30}
                }
            })
        );
    }

    #[tokio::test]
    async fn test_dry_run_does_not_need_credentials() {
        let handler = SendCommandHandler::new(AppConfig::default());
        let outcome = handler
            .execute(&send_args(&["--alert", "hi", "--dry-run"]))
            .await
            .unwrap();

        match outcome {
            SendOutcome::DryRun(document) => {
                let value: serde_json::Value = serde_json::from_str(&document).unwrap();
                assert_eq!(value, json!({"message": {"alert": "hi"}}));
            }
            other => panic!("expected dry run, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_is_configuration_error() {
        let handler = SendCommandHandler::new(AppConfig::default());
        let err = handler
            .execute(&send_args(&["--alert", "hi"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Configuration { ref key, .. } if key.starts_with("push.")));
    }

    #[tokio::test]
    async fn test_execute_posts_document() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/imfpush/v1/apps/T/messages"))
            .and(header("appSecret", "S"))
            .and(body_json(json!({"message": {"alert": "hi"}})))
            .respond_with(ResponseTemplate::new(202).set_body_string("{\"messageId\":\"m1\"}"))
            .expect(1)
            .mount(&server)
            .await;

        let handler = SendCommandHandler::new(config_for(&server.uri()));
        let outcome = handler.execute(&send_args(&["--alert", "hi"])).await.unwrap();

        match outcome {
            SendOutcome::Delivered(response) => {
                assert_eq!(response.status_code, 202);
                assert!(response.is_success());
                assert_eq!(response.body, "{\"messageId\":\"m1\"}");
            }
            other => panic!("expected delivery, got {other:?}"),
        }
    }
}
