//! Relays contact form submissions to the moderation channel.

use std::sync::Arc;

use eventboard_core::messages::contact_message;
use eventboard_core::submission::ContactSubmission;
use eventboard_notify::{DeliveryError, NotificationGateway};

/// Sends contact inquiries through the same gateway as event notifications.
/// Nothing is persisted.
pub struct ContactNotifier {
    gateway: Arc<dyn NotificationGateway>,
}

impl ContactNotifier {
    pub fn new(gateway: Arc<dyn NotificationGateway>) -> Self {
        Self { gateway }
    }

    /// Deliver one already-validated submission.
    pub async fn submit(&self, contact: &ContactSubmission) -> Result<(), DeliveryError> {
        self.gateway.send(&contact_message(contact)).await?;
        tracing::info!("Contact inquiry relayed");
        Ok(())
    }
}
