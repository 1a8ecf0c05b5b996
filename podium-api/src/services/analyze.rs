//! External AI analysis client
//!
//! The analysis service (sentiment/summary/topics) is an opaque HTTP
//! collaborator. Handlers depend on the [`AnalyzeService`] trait so
//! tests can inject a fake instead of a live endpoint.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("podium/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Analysis client errors
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Analysis service error {0}: {1}")]
    Api(u16, String),
}

/// Capability for delegating text analysis to the external service
#[async_trait]
pub trait AnalyzeService: Send + Sync + 'static {
    /// Forward `text` for analysis and return the downstream payload
    /// verbatim
    async fn analyze(&self, text: &str) -> Result<Value, AnalyzeError>;
}

/// Production client talking to the configured analysis endpoint
pub struct HttpAnalyzeService {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpAnalyzeService {
    pub fn new(base_url: &str) -> Result<Self, AnalyzeError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AnalyzeError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AnalyzeService for HttpAnalyzeService {
    async fn analyze(&self, text: &str) -> Result<Value, AnalyzeError> {
        let url = format!("{}/analyze", self.base_url);

        tracing::debug!(url = %url, "Forwarding text to analysis service");

        let response = self
            .http_client
            .post(&url)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| AnalyzeError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnalyzeError::Api(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalyzeError::Network(e.to_string()))?;

        // Relay whatever the service answered; a non-JSON body passes
        // through as a plain string
        Ok(match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => Value::String(body),
        })
    }
}
