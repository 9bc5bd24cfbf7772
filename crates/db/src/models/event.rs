//! Event entity model.

use chrono::{NaiveDate, NaiveTime};
use eventboard_core::collections;
use eventboard_core::event::{NewEvent, ScheduleSlot, Speaker};
use eventboard_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::store::StoreError;

/// A row from the `events` table as read by public queries.
///
/// `auth_code` is not part of the row: reads never return it.
/// Collection columns are still in their encoded form.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: DbId,
    pub title: String,
    pub organizer: String,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub email: String,
    pub prefecture: Option<String>,
    pub event_type: Option<String>,
    pub is_online: bool,
    pub is_offline: bool,
    pub official_url: Option<String>,
    pub online_lecture_url: Option<String>,
    pub venue: Option<String>,
    pub target: Option<String>,
    pub capacity: Option<String>,
    pub description: Option<String>,
    pub tags: String,
    pub speakers: String,
    pub schedule: String,
    pub is_authenticated: bool,
}

impl EventRow {
    /// Build the row that inserting `input` under `id` produces, encoding
    /// the collections exactly as they are written to the database.
    pub fn from_new(id: DbId, input: &NewEvent) -> Result<Self, StoreError> {
        let encoded = EncodedCollections::encode(input)?;
        Ok(Self {
            id,
            title: input.title.clone(),
            organizer: input.organizer.clone(),
            start_date: input.start_date,
            start_time: input.start_time,
            end_date: input.end_date,
            end_time: input.end_time,
            email: input.email.clone(),
            prefecture: input.prefecture.clone(),
            event_type: input.event_type.clone(),
            is_online: input.is_online,
            is_offline: input.is_offline,
            official_url: input.official_url.clone(),
            online_lecture_url: input.online_lecture_url.clone(),
            venue: input.venue.clone(),
            target: input.target.clone(),
            capacity: input.capacity.clone(),
            description: input.description.clone(),
            tags: encoded.tags,
            speakers: encoded.speakers,
            schedule: encoded.schedule,
            is_authenticated: false,
        })
    }
}

/// The three collection columns in their stored form.
#[derive(Debug, Clone)]
pub struct EncodedCollections {
    pub tags: String,
    pub speakers: String,
    pub schedule: String,
}

impl EncodedCollections {
    pub fn encode(input: &NewEvent) -> Result<Self, StoreError> {
        Ok(Self {
            tags: collections::encode(&input.tags).map_err(|source| StoreError::Codec {
                field: "tags",
                source,
            })?,
            speakers: collections::encode(&input.speakers).map_err(|source| {
                StoreError::Codec {
                    field: "speakers",
                    source,
                }
            })?,
            schedule: collections::encode(&input.schedule).map_err(|source| {
                StoreError::Codec {
                    field: "schedule",
                    source,
                }
            })?,
        })
    }
}

/// A publicly visible event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub organizer: String,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub email: String,
    pub prefecture: Option<String>,
    pub event_type: Option<String>,
    pub is_online: bool,
    pub is_offline: bool,
    pub official_url: Option<String>,
    pub online_lecture_url: Option<String>,
    pub venue: Option<String>,
    pub target: Option<String>,
    pub capacity: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub speakers: Vec<Speaker>,
    pub schedule: Vec<ScheduleSlot>,
    pub is_authenticated: bool,
}

impl TryFrom<EventRow> for Event {
    type Error = StoreError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let tags = collections::decode(&row.tags).map_err(|source| StoreError::Codec {
            field: "tags",
            source,
        })?;
        let speakers = collections::decode(&row.speakers).map_err(|source| StoreError::Codec {
            field: "speakers",
            source,
        })?;
        let schedule = collections::decode(&row.schedule).map_err(|source| StoreError::Codec {
            field: "schedule",
            source,
        })?;

        Ok(Self {
            id: row.id,
            title: row.title,
            organizer: row.organizer,
            start_date: row.start_date,
            start_time: row.start_time,
            end_date: row.end_date,
            end_time: row.end_time,
            email: row.email,
            prefecture: row.prefecture,
            event_type: row.event_type,
            is_online: row.is_online,
            is_offline: row.is_offline,
            official_url: row.official_url,
            online_lecture_url: row.online_lecture_url,
            venue: row.venue,
            target: row.target,
            capacity: row.capacity,
            description: row.description,
            tags,
            speakers,
            schedule,
            is_authenticated: row.is_authenticated,
        })
    }
}
