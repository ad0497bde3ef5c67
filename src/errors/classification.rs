use super::types::ReportsError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub retryable: bool,
}

impl ReportsError {
    /// Classify this error for callers that want to decide on their own
    /// whether a request is worth repeating. Nothing in this crate retries.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            ReportsError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                retryable: true,
            },
            ReportsError::Transport(_) => ErrorClassification {
                error_type: "TransportError",
                retryable: true,
            },
            ReportsError::Http { status, .. } => ErrorClassification {
                error_type: "HttpError",
                retryable: *status >= 500 || *status == 429,
            },
            ReportsError::Io(_) => ErrorClassification {
                error_type: "IoError",
                retryable: true,
            },

            ReportsError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                retryable: false,
            },
            ReportsError::Decode(_) => ErrorClassification {
                error_type: "DecodeError",
                retryable: false,
            },
            ReportsError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                retryable: false,
            },
            ReportsError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                retryable: false,
            },
        }
    }
}
