//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload of a successful event creation.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: eventboard_core::types::DbId,
}

/// Payload carrying a human-readable confirmation.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}
