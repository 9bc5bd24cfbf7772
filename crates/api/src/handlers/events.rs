//! Handlers for the public event board.
//!
//! Submissions go through the [`EventCoordinator`](crate::services::EventCoordinator);
//! reads only ever see authenticated events.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use eventboard_core::error::CoreError;
use eventboard_core::submission::EventSubmission;
use eventboard_core::types::DbId;

use crate::error::AppResult;
use crate::response::{CreatedId, DataResponse, Message};
use crate::state::AppState;

/// Query string of the moderation link.
#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    pub auth_code: String,
}

// ---------------------------------------------------------------------------
// GET /event/all
// ---------------------------------------------------------------------------

/// List authenticated events ordered by start date and time.
pub async fn list_events(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = state.store.list_visible().await?;
    tracing::debug!(count = events.len(), "Listed visible events");
    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// POST /event/new
// ---------------------------------------------------------------------------

/// Submit a new event. It stays hidden until a moderator follows the link
/// sent to the moderation channel.
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventSubmission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(submission) = payload?;
    let input = submission.into_new_event()?;

    let id = state.coordinator.create(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedId { id },
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /event/{id}
// ---------------------------------------------------------------------------

/// Get a single authenticated event. Hidden events are reported as missing.
pub async fn get_event(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let event = state
        .store
        .find_visible(id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;
    Ok(Json(DataResponse { data: event }))
}

// ---------------------------------------------------------------------------
// GET /event/update/{id}?auth_code=...
// ---------------------------------------------------------------------------

/// Make an event public using the auth code from its moderation link.
pub async fn authenticate_event(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    query: Result<Query<AuthQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let Query(query) = query?;

    state.store.authenticate(id, &query.auth_code).await?;

    tracing::info!(event_id = id, "Event authenticated");
    Ok(Json(DataResponse {
        data: Message {
            message: "Event authenticated successfully",
        },
    }))
}
