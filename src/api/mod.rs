use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::llm::LlmClient;

pub mod handlers;
pub mod types;

use handlers::{chat, health};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<LlmClient>,
}

/// Public API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/v1/models/{model}/temperature/{temperature}/", post(chat))
        .route("/health", get(health))
}
