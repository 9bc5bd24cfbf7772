//! Moderation channel notifications.
//!
//! - [`NotificationGateway`] - send one text message to the moderation
//!   channel. No retry, no batching.
//! - [`delivery::webhook::SlackWebhook`] - Slack-style incoming webhook.
//! - [`RecordingGateway`] - in-process gateway that records messages.

pub mod delivery;
pub mod gateway;
pub mod recording;

pub use delivery::webhook::{SlackWebhook, WebhookConfig, WebhookConfigError};
pub use gateway::{DeliveryError, NotificationGateway};
pub use recording::RecordingGateway;
