use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::{AppError, AppResult};

/// Builds the HTTP client used by [`ReqwestTransport`](crate::push::ReqwestTransport)
///
/// Timeouts are applied only when configured; otherwise the reqwest
/// defaults stay in effect. TLS is provided by rustls.
///
/// # Example
/// ```ignore
/// let http = HttpConfig { timeout_secs: Some(30), ..Default::default() };
/// let client = build_http_client(&http)?;
/// ```
pub fn build_http_client(config: &HttpConfig) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(secs) = config.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder.build().map_err(|e| AppError::Configuration {
        key: "http".to_string(),
        source: e.into(),
    })
}
