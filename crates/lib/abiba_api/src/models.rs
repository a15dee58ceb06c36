//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`. A missing or null `message` is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Which path produced a chat reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// The completion adapter was called and succeeded.
    Live,
    /// The canned-reply simulator answered.
    Simulation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub mode: ChatMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsResponse {
    pub logs: Vec<String>,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_message_is_optional() {
        let req: ChatRequest = serde_json::from_str("{}").expect("parse");
        assert_eq!(req.message, None);
        let req: ChatRequest = serde_json::from_str(r#"{"message": null}"#).expect("parse");
        assert_eq!(req.message, None);
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).expect("parse");
        assert_eq!(req.message.as_deref(), Some("hi"));
    }

    #[test]
    fn mode_serializes_lowercase() {
        let body = ChatResponse {
            response: "ok".into(),
            mode: ChatMode::Simulation,
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["mode"], "simulation");
        assert_eq!(serde_json::to_value(ChatMode::Live).expect("serialize"), "live");
    }

    #[test]
    fn error_details_are_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse {
            error: "Sync error".into(),
            details: None,
        })
        .expect("serialize");
        assert!(json.get("details").is_none());
    }
}
