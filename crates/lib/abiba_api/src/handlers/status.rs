//! Status endpoint.

use axum::Json;

use abiba_core::status::StatusPayload;

/// `GET /api/status` — static descriptive fields plus the current time.
pub async fn status_handler() -> Json<StatusPayload> {
    Json(StatusPayload::now())
}
