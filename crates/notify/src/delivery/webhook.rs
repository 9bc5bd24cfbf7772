//! Slack-style incoming webhook delivery.
//!
//! [`SlackWebhook`] posts `{"text": <message>}` to a configured URL. A single
//! attempt is made per message; any transport error or non-2xx response is a
//! [`DeliveryError`]. The destination is fixed at construction from a
//! [`WebhookConfig`], so an unconfigured gateway fails every send with
//! [`DeliveryError::NotConfigured`] instead of reading the environment lazily.

use std::time::Duration;

use async_trait::async_trait;

use crate::gateway::{DeliveryError, NotificationGateway};

/// Default HTTP request timeout for a single delivery attempt.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ---------------------------------------------------------------------------
// WebhookConfig
// ---------------------------------------------------------------------------

/// Configuration for the moderation webhook.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Incoming-webhook URL. `None` leaves the gateway unconfigured.
    pub url: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Invalid webhook configuration, reported at startup.
#[derive(Debug, thiserror::Error)]
pub enum WebhookConfigError {
    /// A variable was set but could not be parsed.
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl WebhookConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable               | Required | Default |
    /// |------------------------|----------|---------|
    /// | `SLACK_WEBHOOK_URL`    | no       | unset   |
    /// | `WEBHOOK_TIMEOUT_SECS` | no       | `10`    |
    ///
    /// An empty `SLACK_WEBHOOK_URL` counts as unset.
    pub fn from_env() -> Result<Self, WebhookConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// The timeout must be a whole number of seconds greater than zero.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, WebhookConfigError> {
        let url = lookup("SLACK_WEBHOOK_URL")
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        let timeout_secs = match lookup("WEBHOOK_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(WebhookConfigError::Invalid {
                        var: "WEBHOOK_TIMEOUT_SECS",
                        expected: "positive number of seconds",
                        value,
                    })
                }
            },
        };

        Ok(Self {
            url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Configuration pointing at `url` with the default timeout.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ---------------------------------------------------------------------------
// SlackWebhook
// ---------------------------------------------------------------------------

/// Delivers moderation messages to a Slack-compatible incoming webhook.
pub struct SlackWebhook {
    client: reqwest::Client,
    url: Option<String>,
}

impl SlackWebhook {
    /// Create a gateway with a pre-configured HTTP client.
    pub fn new(config: WebhookConfig) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            url: config.url,
        })
    }
}

#[async_trait]
impl NotificationGateway for SlackWebhook {
    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        let url = self.url.as_deref().ok_or(DeliveryError::NotConfigured)?;

        let payload = serde_json::json!({ "text": message });
        let response = self.client.post(url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Webhook rejected notification");
            return Err(DeliveryError::HttpStatus(status.as_u16()));
        }
        tracing::debug!("Webhook notification delivered");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
