pub mod client;
pub mod error;
pub mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use types::{ChatMessage, ChatRequest, Role};
