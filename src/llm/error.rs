use thiserror::Error;

/// Errors from a single backend chat exchange.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The backend could not be reached: refused connection, DNS
    /// failure, or elapsed request timeout.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success HTTP status.
    #[error("backend at {url} returned status {status}")]
    BackendStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The backend answered 2xx but the body carried no
    /// `message.content`.
    #[error("response from {url} is missing message.content")]
    MalformedResponse { url: String },
}

impl LlmError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}
