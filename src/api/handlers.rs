use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::{
    api::types::{Prompt, PromptReply},
    api::AppState,
    llm::{ChatRequest, LlmError},
};

/// Converse with JuniaGPT: forward the prompt list to the backend LLM
/// and return its reply.
pub async fn chat(
    State(state): State<AppState>,
    Path((model, temperature)): Path<(String, f64)>,
    Json(prompts): Json<Vec<Prompt>>,
) -> Result<Json<PromptReply>, (StatusCode, String)> {
    let messages = prompts.into_iter().map(Into::into).collect();
    let chat = ChatRequest::new(model, temperature, messages);

    let answer = state.llm.chat(&chat).await.map_err(error_status)?;

    Ok(Json(PromptReply { answer }))
}

fn error_status(err: LlmError) -> (StatusCode, String) {
    let status = if err.is_timeout() {
        StatusCode::GATEWAY_TIMEOUT
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, err.to_string())
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
