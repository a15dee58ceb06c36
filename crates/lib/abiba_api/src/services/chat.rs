//! Chat dispatch — live completion or canned simulation.

use std::sync::Arc;

use abiba_core::completion::{AdapterError, CompletionClient};
use abiba_core::simulation;

use crate::models::{ChatMode, ChatResponse};

/// How chat messages are answered. Fixed at startup for the process lifetime.
#[derive(Clone)]
pub enum ChatBackend {
    /// No credential configured: every message goes to the simulator.
    Simulation,
    /// Every message goes to the completion adapter.
    Live(Arc<dyn CompletionClient>),
}

impl std::fmt::Debug for ChatBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatBackend::Simulation => f.write_str("Simulation"),
            ChatBackend::Live(_) => f.write_str("Live"),
        }
    }
}

impl ChatBackend {
    pub fn from_client(client: Option<Arc<dyn CompletionClient>>) -> Self {
        match client {
            Some(client) => ChatBackend::Live(client),
            None => ChatBackend::Simulation,
        }
    }

    /// Answers one message. Only the live path can fail.
    pub async fn reply(&self, message: &str) -> Result<ChatResponse, AdapterError> {
        match self {
            ChatBackend::Simulation => Ok(ChatResponse {
                response: simulation::respond(message).to_string(),
                mode: ChatMode::Simulation,
            }),
            ChatBackend::Live(client) => {
                let response = client.complete(message).await?;
                Ok(ChatResponse {
                    response,
                    mode: ChatMode::Live,
                })
            }
        }
    }
}
