//! Event creation: persist and notify as one all-or-nothing step.
//!
//! [`EventCoordinator`] holds the insert open while the moderation channel
//! is notified. The row is committed only after delivery succeeds, so a
//! failed notification never leaves a record behind. The reverse window is
//! accepted: if delivery succeeds and the commit then fails, moderators hold
//! a link to an event that does not exist.
//!
//! Every exit path after `begin` either commits or rolls back. Early returns
//! and cancelled request futures drop the transaction handle, which rolls
//! back.

use std::sync::Arc;

use eventboard_core::event::NewEvent;
use eventboard_core::messages::{auth_link, new_event_message};
use eventboard_core::types::DbId;
use eventboard_db::{EventStore, StoreError};
use eventboard_notify::{DeliveryError, NotificationGateway};

/// Error type for a failed event creation, by the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum CreateEventError {
    /// No transaction could be opened. Nothing was written or sent.
    #[error("Failed to begin transaction: {0}")]
    Begin(#[source] StoreError),

    /// The insert failed. Nothing was sent.
    #[error("Failed to insert event: {0}")]
    Insert(#[source] StoreError),

    /// Moderators could not be notified. The insert was rolled back.
    #[error("Failed to notify moderators: {0}")]
    Delivery(#[source] DeliveryError),

    /// The notification went out but the commit failed.
    #[error("Failed to commit event: {0}")]
    Commit(#[source] StoreError),
}

/// Creates events so that a record exists if and only if moderators were told
/// about it. Held in [`AppState`](crate::state::AppState) as an
/// `Arc<EventCoordinator>`.
pub struct EventCoordinator {
    store: Arc<dyn EventStore>,
    gateway: Arc<dyn NotificationGateway>,
    public_api_url: String,
}

impl EventCoordinator {
    pub fn new(
        store: Arc<dyn EventStore>,
        gateway: Arc<dyn NotificationGateway>,
        public_api_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            gateway,
            public_api_url: public_api_url.into(),
        }
    }

    /// Create a hidden event and notify moderators with its auth link.
    ///
    /// Lifecycle:
    /// 1. Begin a transaction.
    /// 2. Insert the event (hidden, fresh auth code).
    /// 3. Send the moderation message with the auth link.
    /// 4. Commit.
    ///
    /// Returns the new event id.
    pub async fn create(&self, input: &NewEvent) -> Result<DbId, CreateEventError> {
        // 1. Begin.
        let mut tx = self.store.begin().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to begin event transaction");
            CreateEventError::Begin(e)
        })?;

        // 2. Insert. An error here drops `tx`, which rolls back.
        let created = tx.create_event(input).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to insert event");
            CreateEventError::Insert(e)
        })?;
        let event_id = created.id;

        // 3. Notify.
        let link = auth_link(&self.public_api_url, event_id, &created.auth_code);
        let message = new_event_message(&input.title, &input.organizer, &link);

        if let Err(err) = self.gateway.send(&message).await {
            tracing::warn!(event_id, error = %err, "Moderator notification failed, rolling back");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(
                    event_id,
                    error = %rollback_err,
                    "Rollback after failed notification failed",
                );
            }
            return Err(CreateEventError::Delivery(err));
        }

        // 4. Commit.
        tx.commit().await.map_err(|e| {
            tracing::error!(
                event_id,
                error = %e,
                "Commit failed after moderators were notified",
            );
            CreateEventError::Commit(e)
        })?;

        tracing::info!(event_id, "Event created, awaiting moderation");
        Ok(event_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
