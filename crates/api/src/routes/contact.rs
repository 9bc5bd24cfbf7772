use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact form route, mounted under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(contact::submit_contact))
}
