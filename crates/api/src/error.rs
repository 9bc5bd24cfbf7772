use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventboard_core::error::CoreError;
use eventboard_db::StoreError;
use eventboard_notify::DeliveryError;
use serde_json::json;

use crate::services::CreateEventError;

/// Application-level error type for HTTP handlers.
///
/// Wraps domain, store and delivery errors.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `eventboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An event store error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Event creation failed at one of its steps.
    #[error(transparent)]
    EventCreation(#[from] CreateEventError),

    /// A moderation-channel delivery failure outside event creation.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- Event creation ---
            AppError::EventCreation(err) => match err {
                CreateEventError::Delivery(source) => {
                    tracing::error!(error = %source, "Event discarded: moderators not notified");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DELIVERY_FAILED",
                        "Failed to notify moderators; the event was not saved".to_string(),
                    )
                }
                CreateEventError::Begin(source)
                | CreateEventError::Insert(source)
                | CreateEventError::Commit(source) => {
                    tracing::error!(error = %err, cause = %source, "Event creation failed");
                    internal()
                }
            },

            // --- Delivery ---
            AppError::Delivery(err) => {
                tracing::error!(error = %err, "Notification delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DELIVERY_FAILED",
                    "Failed to deliver message".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// - `AuthMismatch` maps to 400 without revealing whether the id exists.
/// - Everything else maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::AuthMismatch { .. } => (
            StatusCode::BAD_REQUEST,
            "AUTHENTICATION_FAILED",
            "Invalid event id or auth code".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Event store error");
            internal()
        }
    }
}

// ---------------------------------------------------------------------------
// Extractor rejections
// ---------------------------------------------------------------------------

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}
