//! # abiba_api
//!
//! HTTP API library for Abiba.

pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{chat, logs, status};
use crate::services::chat::ChatBackend;

/// Shared application state passed to all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Chat dispatch, resolved once at startup.
    pub chat: ChatBackend,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .route(routes::GET_API_LOGS, get(logs::logs_handler))
        .route(routes::GET_API_STATUS, get(status::status_handler));

    assets::mount(api, &state.config.static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
