use std::fmt::Display;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use crate::config::ClientConfig;
use crate::errors::ReportsError;
use crate::transport::{ApiRequest, HttpTransport, Transport};

/// Client for the administrative reports endpoints.
///
/// Every operation is a single round trip through the transport; response
/// bodies are returned as decoded, without validation or reshaping.
pub struct ReportsClient<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl ReportsClient<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> ReportsClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            transport,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/summary`
    pub async fn get_summary(&self) -> Result<Value, ReportsError> {
        self.dispatch(ApiRequest::get(format!("{}/summary", self.base_url))).await
    }

    /// `GET {base}`
    pub async fn get_list(&self) -> Result<Value, ReportsError> {
        self.dispatch(ApiRequest::get(self.base_url.clone())).await
    }

    /// `GET {base}/{report_id}`. The id is inserted as-is, without escaping.
    pub async fn get_detail(&self, report_id: impl Display) -> Result<Value, ReportsError> {
        let url = format!("{}/{}", self.base_url, report_id);
        self.dispatch(ApiRequest::get(url)).await
    }

    /// `POST {base}/process` with `payload` as the JSON body.
    pub async fn process<P>(&self, payload: &P) -> Result<Value, ReportsError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_value(payload)?;
        self.dispatch(ApiRequest::post(format!("{}/process", self.base_url), body)).await
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Value, ReportsError> {
        debug!(method = %request.method, url = %request.url, "Sending reports request");
        self.transport.send(request).await
    }
}
