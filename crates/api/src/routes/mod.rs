pub mod contact;
pub mod events;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET  /ping                        -> pong
/// /event/...                        -> events::router()
/// POST /contact                     -> contact::router()
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(handlers::ping::ping))
        .nest("/event", events::router())
        .merge(contact::router())
}
