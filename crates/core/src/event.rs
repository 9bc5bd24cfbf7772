//! Event entity value types shared by the store, the coordinator and the API.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A speaker appearing at an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub title: String,
    /// Affiliation of the speaker.
    pub organization: String,
}

/// One slot of an event's timetable. `speaker` refers to a [`Speaker`] by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub time: String,
    pub title: String,
    pub speaker: String,
}

/// A validated event submission, ready to be inserted.
///
/// Produced by [`EventSubmission::into_new_event`](crate::submission::EventSubmission::into_new_event).
/// Carries no id and no auth code: both are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
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
}

/// Identity handed back by the store when an event row is inserted.
///
/// This is the only place the auth code leaves the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEvent {
    pub id: DbId,
    pub auth_code: String,
}
