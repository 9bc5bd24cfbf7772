//! The event store contract.
//!
//! Creation goes through an [`EventTransaction`] so the coordinator can hold
//! the insert open while it notifies moderators, then commit or discard it.
//! Everything else is a single statement against committed state.

use async_trait::async_trait;
use eventboard_core::event::{CreatedEvent, NewEvent};
use eventboard_core::types::DbId;

use crate::models::event::Event;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for event store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connectivity, constraint or query failure from PostgreSQL.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A collection column could not be encoded or decoded.
    #[error("Failed to encode or decode {field}: {source}")]
    Codec {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// No row matches the presented id and auth code.
    #[error("No event with id {id} matches the supplied auth code")]
    AuthMismatch { id: DbId },

    /// The backing store refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Durable storage for community events.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Open an isolated unit of work for creating an event.
    async fn begin(&self) -> Result<Box<dyn EventTransaction>, StoreError>;

    /// All authenticated events ordered by `(start_date, start_time)`, ties by id.
    async fn list_visible(&self) -> Result<Vec<Event>, StoreError>;

    /// The event with `id` if it exists **and** is authenticated.
    ///
    /// Hidden and nonexistent events are both `None`.
    async fn find_visible(&self, id: DbId) -> Result<Option<Event>, StoreError>;

    /// Mark the event visible if `auth_code` matches its stored code.
    ///
    /// Succeeds again for an already authenticated event presented with the
    /// same code. Returns [`StoreError::AuthMismatch`] when no row matches.
    async fn authenticate(&self, id: DbId, auth_code: &str) -> Result<(), StoreError>;

    /// Verify the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// An open transaction on an [`EventStore`].
///
/// Dropping the handle without calling [`commit`](Self::commit) discards
/// every write made through it. `commit` and `rollback` consume the handle,
/// so nothing can be written after the transaction is finished.
#[async_trait]
pub trait EventTransaction: Send {
    /// Insert a hidden event with a freshly generated auth code.
    async fn create_event(&mut self, input: &NewEvent) -> Result<CreatedEvent, StoreError>;

    /// Make all writes visible to other readers.
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;

    /// Discard all writes.
    async fn rollback(self: Box<Self>) -> Result<(), StoreError>;
}
