//! Submission transport
//!
//! "Send JSON, get back an identifier or failure". The HTTP implementation
//! posts once; there is no retry or backoff.

use crate::config::FormConfig;
use crate::error::{FormError, Result};
use async_trait::async_trait;
use reqwest::header;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client version, sent in the user agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Wire types
// =============================================================================

/// Outbound submission body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// ISO-8601 UTC timestamp
    pub time: String,
}

/// Identifier returned by the endpoint, numeric or textual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionId::Number(n) => write!(f, "{}", n),
            SubmissionId::Text(s) => f.write_str(s),
        }
    }
}

/// Successful endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct Receipt {
    pub id: SubmissionId,
}

// =============================================================================
// Transport
// =============================================================================

/// Remote submission endpoint
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn send(&self, payload: &Payload) -> Result<Receipt>;
}

/// JSON-over-HTTP transport
#[derive(Clone)]
pub struct HttpTransport {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &FormConfig) -> Result<Self> {
        let url = url::Url::parse(&config.endpoint)
            .map_err(|e| FormError::Config(format!("endpoint {:?}: {}", config.endpoint, e)))?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!("signup-form/{}", VERSION))
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            endpoint: url.to_string(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn send(&self, payload: &Payload) -> Result<Receipt> {
        let response = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(FormError::Response {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).to_string(),
            });
        }

        serde_json::from_slice::<Receipt>(&body)
            .map_err(|e| FormError::Transport(format!("unexpected response body: {}", e)))
    }
}
