//! Chat request handler.

use axum::Json;
use axum::extract::State;
use tracing::{error, info};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatMode, ChatRequest, ChatResponse};

/// `POST /api/chat` — answer one message, live or simulated.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = body.message.unwrap_or_default();
    info!(query = %message, "User query");

    match state.chat.reply(&message).await {
        Ok(reply) => {
            match reply.mode {
                ChatMode::Live => info!(response = %reply.response, "Abiba (Live)"),
                ChatMode::Simulation => info!(response = %reply.response, "Abiba (Simulation)"),
            }
            Ok(Json(reply))
        }
        Err(e) => {
            error!(error = %e, "Error calling completion API");
            let details = state.config.expose_error_details.then(|| e.to_string());
            Err(AppError::Upstream { details })
        }
    }
}
