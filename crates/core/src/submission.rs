//! Public form submissions and their validation.
//!
//! The wire format is camelCase JSON as sent by the public frontend.
//! Validation runs before anything touches the store or the webhook.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::error::CoreError;
use crate::event::{NewEvent, ScheduleSlot, Speaker};

/// Accepted format for event dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted formats for event times, tried in order.
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Body of `POST /api/v1/event/new`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventSubmission {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "organizer is required"))]
    pub organizer: String,
    #[validate(length(min = 1, message = "startDate is required"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "startTime is required"))]
    pub start_time: String,
    #[validate(length(min = 1, message = "endDate is required"))]
    pub end_date: String,
    #[validate(length(min = 1, message = "endTime is required"))]
    pub end_time: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub prefecture: Option<String>,
    pub event_type: Option<String>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub is_offline: bool,
    pub official_url: Option<String>,
    pub online_lecture_url: Option<String>,
    pub venue: Option<String>,
    pub target: Option<String>,
    pub capacity: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub speakers: Vec<Speaker>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub schedule: Vec<ScheduleSlot>,
}

impl EventSubmission {
    /// Validate the submission and convert it into a typed [`NewEvent`].
    ///
    /// Blank optional strings are stored as `NULL`.
    pub fn into_new_event(self) -> Result<NewEvent, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(format!("invalid request body: {e}")))?;

        Ok(NewEvent {
            start_date: parse_date("startDate", &self.start_date)?,
            start_time: parse_time("startTime", &self.start_time)?,
            end_date: parse_date("endDate", &self.end_date)?,
            end_time: parse_time("endTime", &self.end_time)?,
            title: self.title,
            organizer: self.organizer,
            email: self.email,
            prefecture: non_blank(self.prefecture),
            event_type: non_blank(self.event_type),
            is_online: self.is_online,
            is_offline: self.is_offline,
            official_url: non_blank(self.official_url),
            online_lecture_url: non_blank(self.online_lecture_url),
            venue: non_blank(self.venue),
            target: non_blank(self.target),
            capacity: non_blank(self.capacity),
            description: non_blank(self.description),
            tags: self.tags,
            speakers: self.speakers,
            schedule: self.schedule,
        })
    }
}

/// Body of `POST /api/v1/contact`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 10000, message = "message must be 1-10000 characters"))]
    pub message: String,
}

impl ContactSubmission {
    /// Validate the submission, mapping failures to [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(format!("invalid request body: {e}")))
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!("{field} must be a date in YYYY-MM-DD format, got '{value}'"))
    })
}

/// Parse an `HH:MM:SS` or `HH:MM` time of day.
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, CoreError> {
    let value_trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value_trimmed, fmt).ok())
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "{field} must be a time in HH:MM or HH:MM:SS format, got '{value}'"
            ))
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Frontends send `null` for untouched list inputs.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
