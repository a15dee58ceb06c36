//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use abiba_api::config::ApiConfig;
use abiba_api::services::chat::ChatBackend;
use abiba_api::{AppState, router};
use abiba_core::completion::{AdapterError, CompletionClient};
use abiba_core::logs::LogSource;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

/// Fake adapter returning a fixed outcome and counting calls.
pub struct FakeClient {
    pub outcome: Result<String, String>,
    pub calls: AtomicUsize,
}

impl FakeClient {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(body.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for FakeClient {
    async fn complete(&self, _user_message: &str) -> Result<String, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(|body| AdapterError::Api { status: 429, body })
    }
}

pub fn config(log_source: LogSource, static_dir: PathBuf) -> ApiConfig {
    ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        static_dir,
        log_source,
        expose_error_details: true,
    }
}

pub fn state(chat: ChatBackend) -> AppState {
    AppState {
        config: config(LogSource::Constrained, PathBuf::from("static")),
        chat,
    }
}

/// Sends one request through a fresh router and returns status and body bytes.
pub async fn send(state: AppState, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = router(state).oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, body.to_vec())
}

pub async fn send_json(state: AppState, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(state, req).await;
    let json = serde_json::from_slice(&body).expect("parse JSON");
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
