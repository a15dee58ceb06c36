//! Chat-completion adapter.
//!
//! Wraps one non-streaming call to an OpenAI-compatible chat-completions
//! endpoint (Groq by default). The request parameters are fixed; callers
//! only supply the user message. No retries are attempted.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model identifier sent with every request.
pub const MODEL: &str = "llama-3.1-8b-instant";

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1024;

/// Persona instruction sent as the system message.
pub const SYSTEM_PROMPT: &str = "You are Abiba, the smartest financial AI ecosystem. You help banks with data visualizations, task automation, and secure banking operations. You are professional, precise, and authoritative. Never mention Llama or Groq; you are Abiba itself.";

/// Errors from the completion call.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Something that can turn a user message into a model reply.
///
/// The server holds one of these for its whole lifetime when a credential
/// is configured; tests substitute their own.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, user_message: &str) -> Result<String, AdapterError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// [`CompletionClient`] backed by the Groq chat-completions API.
#[derive(Clone)]
pub struct GroqClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GroqClient {
    /// Client against [`DEFAULT_BASE_URL`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Client against an arbitrary OpenAI-compatible root, e.g. a local mock.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, user_message: &str) -> Result<String, AdapterError> {
        let request = CompletionRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        let resp = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(AdapterError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let data: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| AdapterError::MalformedResponse(e.to_string()))?;

        data.choices
            .into_iter()
            .next()
            .ok_or_else(|| AdapterError::MalformedResponse("empty choices array".to_string()))?
            .message
            .content
            .ok_or_else(|| AdapterError::MalformedResponse("choice has no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_fixed_parameters() {
        let request = CompletionRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: "hi",
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["stream"], false);
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = GroqClient::with_base_url("k", "http://localhost:9999/v1/");
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/chat/completions");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = GroqClient::new("secret-key");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains(DEFAULT_BASE_URL));
    }

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = AdapterError::Api {
            status: 401,
            body: "invalid api key".into(),
        };
        assert_eq!(err.to_string(), "Completion API returned 401: invalid api key");
    }
}
