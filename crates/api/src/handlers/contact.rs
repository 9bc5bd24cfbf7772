use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use eventboard_core::submission::ContactSubmission;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /contact -- relay a contact inquiry to the moderation channel.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(contact) = payload?;
    contact.check()?;

    state.contact.submit(&contact).await?;

    Ok(Json(DataResponse { data: "ok" }))
}
