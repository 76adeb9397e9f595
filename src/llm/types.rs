use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message in a chat exchange.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Request body for the backend `/api/chat` endpoint.
///
/// `stream` is always `false`: the whole reply is read in one exchange.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub options: ChatOptions,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatOptions {
    pub temperature: f64,
}

impl ChatRequest {
    pub fn new(model: String, temperature: f64, messages: Vec<ChatMessage>) -> Self {
        Self {
            model,
            messages,
            stream: false,
            options: ChatOptions { temperature },
        }
    }
}
