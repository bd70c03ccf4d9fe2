//! Outbound chat-completion call.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use chat_relay_types::ChatCompletionRequest;

/// Raw upstream answer: HTTP status plus the parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

/// Failures before a JSON body was obtained.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Connect, TLS, timeout or body read failure
    #[error("{0}")]
    Request(String),

    /// Upstream answered with something that is not JSON
    #[error("upstream returned invalid JSON (HTTP {status}): {message}")]
    InvalidJson { status: u16, message: String },
}

/// Seam between the handler and the network.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// POST `request` to `url` with `Authorization: Bearer <api_key>`.
    async fn complete(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<UpstreamReply, TransportError>;
}

/// reqwest-backed transport sharing one connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CompletionTransport for HttpTransport {
    async fn complete(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<UpstreamReply, TransportError> {
        let response = self
            .http_client
            .post(url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(error_chain(&e)))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| TransportError::Request(error_chain(&e)))?;

        let body = serde_json::from_str(&text)
            .map_err(|e| TransportError::InvalidJson { status, message: e.to_string() })?;

        Ok(UpstreamReply { status, body })
    }
}

/// Join an error with its sources so causes such as "operation timed out" reach the caller.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
