//! Route definitions for the event board.
//!
//! Mounted at `/event` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Event routes.
///
/// ```text
/// GET    /all                          -> list_events
/// POST   /new                          -> create_event
/// GET    /{id}                         -> get_event
/// GET    /update/{id}?auth_code=...    -> authenticate_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(events::list_events))
        .route("/new", post(events::create_event))
        .route("/{id}", get(events::get_event))
        .route("/update/{id}", get(events::authenticate_event))
}
