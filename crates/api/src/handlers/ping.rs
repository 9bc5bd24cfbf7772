use axum::Json;

use crate::response::DataResponse;

/// GET /ping -- liveness check for the API prefix. Touches nothing.
pub async fn ping() -> Json<DataResponse<&'static str>> {
    Json(DataResponse { data: "pong" })
}
