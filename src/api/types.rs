use serde::{Deserialize, Serialize};

use crate::llm::{ChatMessage, Role};

/// A single prompt supplied by the caller.
#[derive(Debug, Deserialize)]
pub struct Prompt {
    pub role: Role,
    pub content: String,
}

impl From<Prompt> for ChatMessage {
    fn from(prompt: Prompt) -> Self {
        ChatMessage {
            role: prompt.role,
            content: prompt.content,
        }
    }
}

/// Reply returned to the caller.
#[derive(Debug, Serialize)]
pub struct PromptReply {
    pub answer: String,
}
