//! Anthropic messages-API chat adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{normalize_text, status_error, ChatProvider};
use crate::api::{ChatResult, OutboundMessage, ProviderError, ProviderReply};
use crate::config::{ProviderConfig, ProviderId};

// Keep this version pinned for backward compatibility.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Adapter for the Anthropic `/messages` wire shape.
///
/// Credential travels in the `x-api-key` header alongside a pinned
/// `anthropic-version`; the request carries no system message.
#[derive(Debug)]
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub fn new(config: &ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/messages", self.base_url)
    }

    fn build_request(&self, message: &OutboundMessage) -> MessagesRequest {
        MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![WireMessage {
                role: "user",
                content: message.text().to_string(),
            }],
        }
    }

    fn extract_text(response: MessagesResponse) -> ChatResult<String> {
        let text = response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text);
        normalize_text(text, "missing content[0].text")
    }
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    async fn send(&self, message: &OutboundMessage) -> ChatResult<ProviderReply> {
        debug!(model = %self.model, "sending Anthropic messages request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&self.build_request(message))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedBody(e.to_string()))?;

        Ok(ProviderReply {
            text: Self::extract_text(body)?,
        })
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}
