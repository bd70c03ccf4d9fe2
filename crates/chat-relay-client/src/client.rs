use crate::error::ClientError;
use crate::types::ClientConfig;
use chat_relay_types::{ChatReply, ChatRequest, ErrorBody};
use reqwest::Client;
use url::Url;

const CHAT_ENDPOINT: &str = "/api/chat";

pub struct RelayClient {
    client: Client,
    endpoint: Url,
    config: ClientConfig,
}

impl RelayClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint =
            Url::parse(&format!("{}{}", config.base_url.trim_end_matches('/'), CHAT_ENDPOINT))?;
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, endpoint, config })
    }

    /// Send one message and return the relay's reply. No retries.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ClientError> {
        tracing::debug!(
            "POST {} (modelType={})",
            self.endpoint,
            request.model_type.as_deref().unwrap_or("<none>")
        );

        let resp = self.client.post(self.endpoint.clone()).json(&request).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text).map(|b| b.error).unwrap_or(text);
            return Err(ClientError::Relay { status: status.as_u16(), message });
        }

        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let client = RelayClient::new(ClientConfig {
            base_url: "http://127.0.0.1:3000/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:3000/api/chat");

        let prefixed = RelayClient::new(ClientConfig {
            base_url: "https://example.com/relay".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(prefixed.endpoint().as_str(), "https://example.com/relay/api/chat");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = RelayClient::new(ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
