use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-2xx response. The body is kept exactly as the server sent it.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Response decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
