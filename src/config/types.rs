use serde::{Deserialize, Serialize};
use crate::errors::ReportsError;

/// Base endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/admin/reports";

/// Environment variable that overrides the configured base endpoint.
pub const BASE_URL_ENV: &str = "ADMIN_REPORTS_BASE_URL";

/// On-disk configuration file layout.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AdminReportsConfig {
    pub reports: Option<ReportsConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportsConfig {
    pub base_url: Option<String>,
}

/// Validated settings a `ReportsClient` is constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate `base_url` and strip trailing slashes so that operation
    /// paths can be appended with a single `/`.
    pub fn new(base_url: &str) -> Result<Self, ReportsError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url = reqwest::Url::parse(trimmed)
            .map_err(|e| ReportsError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ReportsError::Config(format!(
                "Unsupported scheme '{}' in base URL, expected http or https",
                url.scheme()
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ReportsError::Config(
                "Base URL must not carry a query string or fragment".into(),
            ));
        }

        Ok(Self { base_url: trimmed.to_string() })
    }

    /// Pick the base endpoint from, in order: an explicit override, the
    /// environment, the config file, then `DEFAULT_BASE_URL`.
    pub fn resolve(
        explicit: Option<&str>,
        env: Option<&str>,
        file: Option<&AdminReportsConfig>,
    ) -> Result<Self, ReportsError> {
        let from_file = file
            .and_then(|c| c.reports.as_ref())
            .and_then(|r| r.base_url.as_deref());

        let chosen = explicit
            .or(env.filter(|v| !v.trim().is_empty()))
            .or(from_file)
            .unwrap_or(DEFAULT_BASE_URL);

        Self::new(chosen)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}
