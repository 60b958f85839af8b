//! Google Gemini generateContent chat adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{normalize_text, status_error, ChatProvider};
use crate::api::{ChatResult, OutboundMessage, ProviderError, ProviderReply};
use crate::config::{ProviderConfig, ProviderId};

/// Adapter for the Google `models/{model}:generateContent` wire shape.
///
/// The credential travels in the query string; there is no auth header.
#[derive(Debug)]
pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
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
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn build_request(&self, message: &OutboundMessage) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: message.text().to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_tokens,
            },
        }
    }

    fn extract_text(response: GenerateContentResponse) -> ChatResult<String> {
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text);
        normalize_text(text, "missing candidates[0].content.parts[0].text")
    }
}

#[async_trait]
impl ChatProvider for GoogleProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Google
    }

    async fn send(&self, message: &OutboundMessage) -> ChatResult<ProviderReply> {
        debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
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

        let body: GenerateContentResponse = response
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
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> GoogleProvider {
        GoogleProvider::new(&ProviderConfig {
            api_key: "g-test".into(),
            base_url: "https://generativelanguage.googleapis.com/v1".into(),
            model: "gemini-pro".into(),
            temperature: 0.5,
            max_tokens: 1024,
            timeout_ms: 60_000,
        })
    }

    #[test]
    fn credential_lives_in_the_query_string() {
        assert_eq!(
            provider().endpoint(),
            "https://generativelanguage.googleapis.com/v1/models/gemini-pro:generateContent?key=g-test"
        );
    }

    #[test]
    fn request_uses_camel_case_generation_config() {
        let message = OutboundMessage::new("what is 6*7").unwrap();
        let body = serde_json::to_value(provider().build_request(&message)).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{"parts": [{"text": "what is 6*7"}]}],
                "generationConfig": {"temperature": 0.5, "maxOutputTokens": 1024},
            })
        );
    }

    #[test]
    fn extract_text_reads_first_candidate_part() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "42"}]}}],
        }))
        .unwrap();
        assert_eq!(GoogleProvider::extract_text(response).unwrap(), "42");
    }

    #[test]
    fn empty_candidates_is_malformed() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": []})).unwrap();
        assert!(matches!(
            GoogleProvider::extract_text(response),
            Err(ProviderError::MalformedBody(_))
        ));
    }

    #[test]
    fn empty_parts_is_malformed() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": []}}]})).unwrap();
        assert!(matches!(
            GoogleProvider::extract_text(response),
            Err(ProviderError::MalformedBody(_))
        ));
    }
}
