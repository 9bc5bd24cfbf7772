//! In-process [`EventStore`] with the same visibility and transaction rules
//! as the PostgreSQL store.
//!
//! Rows go through the same [`EventRow`] encoding as the database, so the
//! collection serialization contract is exercised on every read. Pending
//! inserts live inside the transaction handle and are discarded when it is
//! dropped or rolled back. Ids come from a monotonic counter and are never
//! reused, even when an insert is rolled back.
//!
//! Fault injection ([`fail_begin`](MemoryEventStore::fail_begin),
//! [`fail_insert`](MemoryEventStore::fail_insert),
//! [`fail_commit`](MemoryEventStore::fail_commit)) lets callers exercise the
//! failure paths of code built on top of the store.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use eventboard_core::auth_code::generate_auth_code;
use eventboard_core::event::{CreatedEvent, NewEvent};
use eventboard_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::event::{Event, EventRow};
use crate::store::{EventStore, EventTransaction, StoreError};

#[derive(Debug, Clone)]
struct StoredEvent {
    row: EventRow,
    auth_code: String,
}

#[derive(Default)]
struct Inner {
    rows: RwLock<Vec<StoredEvent>>,
    last_id: AtomicI64,
    fail_begin: AtomicBool,
    fail_insert: AtomicBool,
    fail_commit: AtomicBool,
}

/// Event store held entirely in memory. Cheap to clone; clones share rows.
#[derive(Clone, Default)]
pub struct MemoryEventStore {
    inner: Arc<Inner>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent [`EventStore::begin`] fail.
    pub fn fail_begin(&self, fail: bool) {
        self.inner.fail_begin.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent [`EventTransaction::create_event`] fail.
    pub fn fail_insert(&self, fail: bool) {
        self.inner.fail_insert.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent [`EventTransaction::commit`] fail. The failed
    /// transaction's writes are discarded.
    pub fn fail_commit(&self, fail: bool) {
        self.inner.fail_commit.store(fail, Ordering::SeqCst);
    }

    /// Number of committed rows, visible or not.
    pub async fn row_count(&self) -> usize {
        self.inner.rows.read().await.len()
    }

    /// Number of committed rows, visible or not, with this title and organizer.
    pub async fn count_matching(&self, title: &str, organizer: &str) -> usize {
        self.inner
            .rows
            .read()
            .await
            .iter()
            .filter(|e| e.row.title == title && e.row.organizer == organizer)
            .count()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn begin(&self) -> Result<Box<dyn EventTransaction>, StoreError> {
        if self.inner.fail_begin.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("begin refused".into()));
        }
        Ok(Box::new(MemoryTransaction {
            inner: Arc::clone(&self.inner),
            pending: Vec::new(),
        }))
    }

    async fn list_visible(&self) -> Result<Vec<Event>, StoreError> {
        let mut rows: Vec<EventRow> = self
            .inner
            .rows
            .read()
            .await
            .iter()
            .filter(|e| e.row.is_authenticated)
            .map(|e| e.row.clone())
            .collect();
        rows.sort_by_key(|r| (r.start_date, r.start_time, r.id));
        rows.into_iter().map(Event::try_from).collect()
    }

    async fn find_visible(&self, id: DbId) -> Result<Option<Event>, StoreError> {
        let row = self
            .inner
            .rows
            .read()
            .await
            .iter()
            .find(|e| e.row.id == id && e.row.is_authenticated)
            .map(|e| e.row.clone());
        row.map(Event::try_from).transpose()
    }

    async fn authenticate(&self, id: DbId, auth_code: &str) -> Result<(), StoreError> {
        let mut rows = self.inner.rows.write().await;
        match rows
            .iter_mut()
            .find(|e| e.row.id == id && e.auth_code == auth_code)
        {
            Some(stored) => {
                stored.row.is_authenticated = true;
                Ok(())
            }
            None => Err(StoreError::AuthMismatch { id }),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Open transaction on a [`MemoryEventStore`].
pub struct MemoryTransaction {
    inner: Arc<Inner>,
    pending: Vec<StoredEvent>,
}

#[async_trait]
impl EventTransaction for MemoryTransaction {
    async fn create_event(&mut self, input: &NewEvent) -> Result<CreatedEvent, StoreError> {
        if self.inner.fail_insert.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("insert refused".into()));
        }
        let id = self.inner.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let auth_code = generate_auth_code();
        let row = EventRow::from_new(id, input)?;
        self.pending.push(StoredEvent {
            row,
            auth_code: auth_code.clone(),
        });
        Ok(CreatedEvent { id, auth_code })
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        if self.inner.fail_commit.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("commit refused".into()));
        }
        let MemoryTransaction { inner, pending } = *self;
        inner.rows.write().await.extend(pending);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
