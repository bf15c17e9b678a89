use std::collections::HashMap;

/// Failures surfaced by the HTTP adapter, normalized from reqwest and the
/// remote's error envelope.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The remote answered with its structured error envelope.
    #[error("upstream error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: HashMap<String, Vec<String>>,
    },

    /// The configured deadline elapsed before a response arrived.
    #[error("request timeout")]
    Timeout,

    /// The remote could not be reached at all.
    #[error("network error")]
    Network(String),

    /// Non-2xx response without a recognizable envelope; raw body kept.
    #[error("upstream returned status {status}")]
    Status { status: u16, body: String },

    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Network(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
