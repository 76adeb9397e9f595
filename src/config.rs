use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_BACKEND_ADDR: &str = "localhost:11434";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 180;

/// Where the backend LLM server lives and how long a single chat
/// exchange may take before the transport gives up.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub root_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub backend: BackendConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr =
            dotenvy::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let root_url =
            dotenvy::var("LLM_BACKEND_ADDR").unwrap_or_else(|_| DEFAULT_BACKEND_ADDR.to_string());
        let timeout_secs = dotenvy::var("LLM_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            bind_addr,
            backend: BackendConfig {
                root_url,
                timeout: Duration::from_secs(timeout_secs),
            },
        }
    }
}
