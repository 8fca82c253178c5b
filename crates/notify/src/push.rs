//! Push delivery via FCM device tokens.
//!
//! [`PushSender`] posts to the FCM HTTP endpoint with `reqwest`, one request
//! per token so each token gets its own success/failure classification. A
//! token rejected as invalid/unregistered is reported as
//! [`PushError::InvalidToken`] so the caller can prune it from the user's
//! token set; every other failure is transient and must not trigger pruning.

use std::time::Duration;

use serde::Deserialize;

use lexicard_core::compose::Message;

/// HTTP request timeout for a single push attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default FCM send endpoint.
const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for push delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The push service rejected the token as invalid or unregistered.
    /// The caller should remove this token from the user's token set.
    #[error("Device token is invalid or unregistered")]
    InvalidToken,

    /// Any other error reported by the push service.
    #[error("Push service error: {0}")]
    Service(String),
}

/// Map an FCM result error code onto the error taxonomy.
///
/// `NotRegistered` / `InvalidRegistration` / `MissingRegistration` mean the
/// token itself is dead; everything else is a transient service problem.
fn classify_fcm_error(code: &str) -> PushError {
    match code {
        "NotRegistered" | "InvalidRegistration" | "MissingRegistration" => PushError::InvalidToken,
        other => PushError::Service(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// PushConfig
// ---------------------------------------------------------------------------

/// Configuration for the FCM push sender.
#[derive(Debug, Clone)]
pub struct PushConfig {
    /// FCM server key used in the `Authorization` header.
    pub server_key: String,
    /// Send endpoint, overridable for tests.
    pub endpoint: String,
}

impl PushConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `FCM_SERVER_KEY` is not set, signalling that push
    /// delivery is not configured and the push channel should be skipped.
    ///
    /// | Variable         | Required | Default                                 |
    /// |------------------|----------|-----------------------------------------|
    /// | `FCM_SERVER_KEY` | yes      | --                                       |
    /// | `FCM_ENDPOINT`   | no       | `https://fcm.googleapis.com/fcm/send`   |
    pub fn from_env() -> Option<Self> {
        let server_key = std::env::var("FCM_SERVER_KEY").ok()?;
        Some(Self {
            server_key,
            endpoint: std::env::var("FCM_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_FCM_ENDPOINT.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// PushSender
// ---------------------------------------------------------------------------

/// Subset of the FCM send response needed for per-token classification.
#[derive(Debug, Deserialize)]
struct FcmResponse {
    #[serde(default)]
    results: Vec<FcmResult>,
}

#[derive(Debug, Deserialize)]
struct FcmResult {
    error: Option<String>,
}

/// Sends composed notification messages to device tokens via FCM.
pub struct PushSender {
    client: reqwest::Client,
    config: PushConfig,
}

impl PushSender {
    /// Create a new push sender with a pre-configured HTTP client.
    pub fn new(config: PushConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Deliver a message to a single device token.
    pub async fn send_to_token(&self, token: &str, message: &Message) -> Result<(), PushError> {
        let payload = serde_json::json!({
            "to": token,
            "priority": "high",
            "notification": {
                "title": message.title,
                "body": message.body_text,
                "sound": "default",
            },
            "data": { "url": message.action_url },
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("key={}", self.config.server_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PushError::Service(format!("HTTP {}", status.as_u16())));
        }

        let body: FcmResponse = response.json().await?;
        if let Some(code) = body.results.first().and_then(|r| r.error.as_deref()) {
            return Err(classify_fcm_error(code));
        }

        Ok(())
    }

    /// Deliver a message to many device tokens, one attempt per token.
    ///
    /// Returns the outcome for every token in input order; a failing token
    /// never prevents the remaining tokens from being attempted.
    pub async fn send_to_tokens(
        &self,
        tokens: &[String],
        message: &Message,
    ) -> Vec<(String, Result<(), PushError>)> {
        let mut outcomes = Vec::with_capacity(tokens.len());
        for token in tokens {
            let result = self.send_to_token(token, message).await;
            if let Err(e) = &result {
                tracing::warn!(token, error = %e, "Push delivery failed for token");
            }
            outcomes.push((token.clone(), result));
        }
        outcomes
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn from_env_returns_none_without_server_key() {
        std::env::remove_var("FCM_SERVER_KEY");
        assert!(PushConfig::from_env().is_none());
    }

    #[test]
    fn dead_token_codes_classify_as_invalid() {
        for code in ["NotRegistered", "InvalidRegistration", "MissingRegistration"] {
            assert_matches!(classify_fcm_error(code), PushError::InvalidToken);
        }
    }

    #[test]
    fn other_codes_classify_as_service_error() {
        assert_matches!(
            classify_fcm_error("InternalServerError"),
            PushError::Service(code) if code == "InternalServerError"
        );
        assert_matches!(classify_fcm_error("Unavailable"), PushError::Service(_));
    }

    #[test]
    fn fcm_response_parses_per_token_errors() {
        let body: FcmResponse = serde_json::from_str(
            r#"{"success":0,"failure":1,"results":[{"error":"NotRegistered"}]}"#,
        )
        .unwrap();
        assert_eq!(body.results[0].error.as_deref(), Some("NotRegistered"));

        let ok: FcmResponse =
            serde_json::from_str(r#"{"success":1,"failure":0,"results":[{"message_id":"m1"}]}"#)
                .unwrap();
        assert!(ok.results[0].error.is_none());
    }
}
