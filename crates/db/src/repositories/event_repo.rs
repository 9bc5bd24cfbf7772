//! PostgreSQL implementation of [`EventStore`] over the `events` table.

use async_trait::async_trait;
use eventboard_core::auth_code::generate_auth_code;
use eventboard_core::event::{CreatedEvent, NewEvent};
use eventboard_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::event::{EncodedCollections, Event, EventRow};
use crate::store::{EventStore, EventTransaction, StoreError};

/// Column list for public `events` queries. Never includes `auth_code`.
const COLUMNS: &str = "id, title, organizer, start_date, start_time, end_date, end_time, \
    email, prefecture, event_type, is_online, is_offline, official_url, \
    online_lecture_url, venue, target, capacity, description, tags, speakers, \
    schedule, is_authenticated";

/// Event store backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn begin(&self) -> Result<Box<dyn EventTransaction>, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgEventTransaction { tx }))
    }

    async fn list_visible(&self) -> Result<Vec<Event>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM events \
             WHERE is_authenticated = TRUE \
             ORDER BY start_date, start_time, id"
        );
        let rows = sqlx::query_as::<_, EventRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Event::try_from).collect()
    }

    async fn find_visible(&self, id: DbId) -> Result<Option<Event>, StoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM events WHERE id = $1 AND is_authenticated = TRUE");
        let row = sqlx::query_as::<_, EventRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Event::try_from).transpose()
    }

    async fn authenticate(&self, id: DbId, auth_code: &str) -> Result<(), StoreError> {
        // A single conditional UPDATE: concurrent callers with the same code
        // serialise on the row lock and all observe one matching row.
        let result = sqlx::query(
            "UPDATE events SET is_authenticated = TRUE WHERE id = $1 AND auth_code = $2",
        )
        .bind(id)
        .bind(auth_code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::AuthMismatch { id });
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

/// An open PostgreSQL transaction. sqlx rolls it back on drop.
pub struct PgEventTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl EventTransaction for PgEventTransaction {
    async fn create_event(&mut self, input: &NewEvent) -> Result<CreatedEvent, StoreError> {
        let auth_code = generate_auth_code();
        let encoded = EncodedCollections::encode(input)?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO events \
                (title, organizer, start_date, start_time, end_date, end_time, email, \
                 prefecture, event_type, is_online, is_offline, official_url, \
                 online_lecture_url, venue, target, capacity, description, tags, \
                 speakers, schedule, auth_code, is_authenticated) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                     $15, $16, $17, $18, $19, $20, $21, FALSE) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.organizer)
        .bind(input.start_date)
        .bind(input.start_time)
        .bind(input.end_date)
        .bind(input.end_time)
        .bind(&input.email)
        .bind(&input.prefecture)
        .bind(&input.event_type)
        .bind(input.is_online)
        .bind(input.is_offline)
        .bind(&input.official_url)
        .bind(&input.online_lecture_url)
        .bind(&input.venue)
        .bind(&input.target)
        .bind(&input.capacity)
        .bind(&input.description)
        .bind(&encoded.tags)
        .bind(&encoded.speakers)
        .bind(&encoded.schedule)
        .bind(&auth_code)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(CreatedEvent { id, auth_code })
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
