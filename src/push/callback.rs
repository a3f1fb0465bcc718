//! Result delivery for completed sends.

use crate::error::AppError;

/// Outcome of a request that reached the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response body as returned by the backend
    pub body: String,
    /// Round-trip time in milliseconds
    pub duration_ms: u64,
}

impl PushResponse {
    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Receives the outcome of [`PushClient::send_with_callback`](super::PushClient::send_with_callback)
///
/// Exactly one method is invoked per send.
pub trait PushCallback {
    /// The backend accepted the notification (2xx)
    fn on_success(&mut self, status_code: u16, body: &str);

    /// The backend rejected the notification, the request could not be
    /// made, or the client was not ready to send
    ///
    /// # Arguments
    /// * `status_code` - HTTP status when a response was received
    /// * `body` - Response body when a response was received
    /// * `error` - Cause when no response was received
    fn on_failure(&mut self, status_code: Option<u16>, body: Option<&str>, error: Option<&AppError>);
}

/// [`PushCallback`] built from two closures
pub struct FnCallback<S, F> {
    on_success: S,
    on_failure: F,
}

impl<S, F> FnCallback<S, F>
where
    S: FnMut(u16, &str),
    F: FnMut(Option<u16>, Option<&str>, Option<&AppError>),
{
    pub fn new(on_success: S, on_failure: F) -> Self {
        Self {
            on_success,
            on_failure,
        }
    }
}

impl<S, F> PushCallback for FnCallback<S, F>
where
    S: FnMut(u16, &str),
    F: FnMut(Option<u16>, Option<&str>, Option<&AppError>),
{
    fn on_success(&mut self, status_code: u16, body: &str) {
        (self.on_success)(status_code, body)
    }

    fn on_failure(&mut self, status_code: Option<u16>, body: Option<&str>, error: Option<&AppError>) {
        (self.on_failure)(status_code, body, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_range() {
        let response = |status_code| PushResponse {
            status_code,
            body: String::new(),
            duration_ms: 0,
        };
        assert!(response(200).is_success());
        assert!(response(202).is_success());
        assert!(!response(199).is_success());
        assert!(!response(300).is_success());
        assert!(!response(401).is_success());
    }

    #[test]
    fn test_fn_callback_dispatch() {
        let mut successes = Vec::new();
        let mut failures = Vec::new();
        {
            let mut callback = FnCallback::new(
                |status, body: &str| successes.push((status, body.to_string())),
                |status, _body, error: Option<&AppError>| failures.push((status, error.is_some())),
            );
            callback.on_success(202, "queued");
            callback.on_failure(None, None, Some(&AppError::NotInitialized));
        }

        assert_eq!(successes, vec![(202, "queued".to_string())]);
        assert_eq!(failures, vec![(None, true)]);
    }
}
