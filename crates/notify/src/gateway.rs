use async_trait::async_trait;

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// No destination URL was configured.
    #[error("Notification destination is not configured")]
    NotConfigured,

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

/// Sends a single text message to the moderation channel.
///
/// One call is one delivery attempt. Implementations never retry: callers
/// decide what a failure means.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn send(&self, message: &str) -> Result<(), DeliveryError>;
}
