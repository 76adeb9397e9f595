use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::error;

use crate::config::BackendConfig;

use super::error::LlmError;
use super::types::ChatRequest;

/// The client used to communicate with the backend LLM.
///
/// Holds one pooled `reqwest::Client`; constructed once at startup and
/// shared through `AppState` for the process lifetime.
#[derive(Clone, Debug)]
pub struct LlmClient {
    client: reqwest::Client,
    root_url: String,
}

impl LlmClient {
    pub fn new(config: &BackendConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            root_url: config.root_url.clone(),
        })
    }

    fn chat_route(&self) -> String {
        format!("http://{}/api/chat", self.root_url)
    }

    /// POST one chat request to the backend and pull the reply text out
    /// of the response body. No retries: a failed exchange is reported
    /// to the caller as-is.
    pub async fn chat(&self, chat: &ChatRequest) -> Result<String, LlmError> {
        let url = self.chat_route();

        let response = self
            .client
            .post(&url)
            .json(chat)
            .send()
            .await
            .map_err(|source| {
                error!("an error occurred while requesting {url}: {source}");
                LlmError::Transport {
                    url: url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("error response {status} while requesting {url}");
            return Err(LlmError::BackendStatus { url, status });
        }

        let body: Value = response.json().await.map_err(|source| {
            error!("unreadable response body from {url}: {source}");
            LlmError::MalformedResponse { url: url.clone() }
        })?;

        match body
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
        {
            Some(answer) => Ok(answer.to_string()),
            None => {
                error!("response from {url} has no message.content");
                Err(LlmError::MalformedResponse { url })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    use super::LlmClient;
    use crate::config::BackendConfig;
    use crate::llm::{ChatMessage, ChatRequest, LlmError, Role};

    type Seen = Arc<Mutex<Option<Value>>>;

    async fn spawn_backend(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service()).await.unwrap();
        });
        addr.to_string()
    }

    fn client_for(addr: &str) -> LlmClient {
        LlmClient::new(&BackendConfig {
            root_url: addr.to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn sample_chat() -> ChatRequest {
        ChatRequest::new(
            "llama3".into(),
            0.7,
            vec![
                ChatMessage {
                    role: Role::System,
                    content: "You are a helpful assistant.".into(),
                },
                ChatMessage {
                    role: Role::User,
                    content: "this is a test".into(),
                },
            ],
        )
    }

    async fn record_chat(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
        *seen.lock().await = Some(body);
        Json(json!({"message": {"content": "Hi there"}}))
    }

    #[tokio::test]
    async fn forwards_payload_and_extracts_answer() {
        let seen: Seen = Arc::new(Mutex::new(None));
        let app = Router::new()
            .route("/api/chat", post(record_chat))
            .with_state(seen.clone());
        let addr = spawn_backend(app).await;

        let answer = client_for(&addr).chat(&sample_chat()).await.unwrap();
        assert_eq!(answer, "Hi there");

        let body = seen.lock().await.take().unwrap();
        assert_eq!(
            body,
            json!({
                "model": "llama3",
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "this is a test"}
                ],
                "stream": false,
                "options": {"temperature": 0.7}
            })
        );
    }

    #[tokio::test]
    async fn non_success_status_is_surfaced() {
        let app = Router::new().route(
            "/api/chat",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let addr = spawn_backend(app).await;

        let err = client_for(&addr).chat(&sample_chat()).await.unwrap_err();
        assert!(matches!(
            err,
            LlmError::BackendStatus { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Bind then drop to get a port nobody is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let err = client_for(&addr).chat(&sample_chat()).await.unwrap_err();
        assert!(matches!(err, LlmError::Transport { .. }));
    }

    #[tokio::test]
    async fn missing_message_content_is_malformed() {
        let app = Router::new().route(
            "/api/chat",
            post(|| async { Json(json!({"done": true})) }),
        );
        let addr = spawn_backend(app).await;

        let err = client_for(&addr).chat(&sample_chat()).await.unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let app = Router::new().route("/api/chat", post(|| async { "not json" }));
        let addr = spawn_backend(app).await;

        let err = client_for(&addr).chat(&sample_chat()).await.unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse { .. }));
    }
}
