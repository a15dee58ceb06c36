//! Log view endpoint.

use axum::Json;
use axum::extract::State;
use tracing::error;

use crate::AppState;
use crate::error::AppResult;
use crate::models::LogsResponse;

/// `GET /api/logs` — recent lines from the configured log source.
pub async fn logs_handler(State(state): State<AppState>) -> AppResult<Json<LogsResponse>> {
    let logs = state.config.log_source.read().await.inspect_err(|e| {
        error!(error = %e, "Error reading logs");
    })?;

    Ok(Json(LogsResponse { logs }))
}
