use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use crate::errors::ReportsError;
use super::{ApiRequest, HttpMethod, Transport};

/// `Transport` backed by a `reqwest::Client` with its default settings.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Use a preconfigured client (proxies, TLS roots, timeouts).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ReportsError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let resp = builder.send().await.map_err(|e| {
            warn!(method = %request.method, url = %request.url, error = %e, "Reports request failed");
            ReportsError::Network(e)
        })?;

        let status = resp.status();
        debug!(method = %request.method, url = %request.url, status = status.as_u16(), "Reports response received");

        if !status.is_success() {
            let body = resp.text().await.map_err(|e| {
                warn!(method = %request.method, url = %request.url, error = %e, "Failed to read error response body");
                ReportsError::Network(e)
            })?;
            return Err(ReportsError::Http { status: status.as_u16(), body });
        }

        let bytes = resp.bytes().await.map_err(ReportsError::Network)?;
        // The process endpoint answers with an empty body
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(ReportsError::Decode)
    }
}
