//! OpenAI-compatible chat adapter (groq, openai, together).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{normalize_text, status_error, ChatProvider};
use crate::api::{ChatResult, OutboundMessage, ProviderError, ProviderReply};
use crate::config::{ProviderConfig, ProviderId};
use crate::core::prompt;

/// Adapter for the OpenAI chat-completions wire shape.
///
/// Groq, OpenAI, and Together AI all speak it; instances differ only in the
/// provider id, base URL, and model they carry.
#[derive(Debug)]
pub struct OpenAiCompatibleProvider {
    id: ProviderId,
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiCompatibleProvider {
    pub fn new(id: ProviderId, config: &ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("failed to build HTTP client");

        Self {
            id,
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    fn build_request(&self, message: &OutboundMessage) -> ChatCompletionsRequest {
        ChatCompletionsRequest {
            model: self.model.clone(),
            messages: vec![
                WireMessage {
                    role: "system",
                    content: prompt::tutor_system_prompt().to_string(),
                },
                WireMessage {
                    role: "user",
                    content: message.text().to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    fn extract_text(response: ChatCompletionsResponse) -> ChatResult<String> {
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);
        normalize_text(content, "missing choices[0].message.content")
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatibleProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    async fn send(&self, message: &OutboundMessage) -> ChatResult<ProviderReply> {
        debug!(provider = %self.id, model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .header(header::AUTHORIZATION, self.auth_header())
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

        let body: ChatCompletionsResponse = response
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
struct ChatCompletionsRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
