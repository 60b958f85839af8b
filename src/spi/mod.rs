//! Chat SPI - the provider contract and its wire-family implementations.
//!
//! Three adapters cover five provider ids:
//! - [`OpenAiCompatibleProvider`]: groq, openai, together (one wire shape,
//!   differing only in base URL and model)
//! - [`AnthropicProvider`]: anthropic
//! - [`GoogleProvider`]: google
//!
//! Every adapter maps failures into the same three-kind
//! [`ProviderError`](crate::api::ProviderError) taxonomy and trims the
//! extracted reply text before returning it.

mod anthropic;
mod google;
mod openai;

pub use anthropic::AnthropicProvider;
pub use google::GoogleProvider;
pub use openai::OpenAiCompatibleProvider;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::api::{ChatResult, OutboundMessage, ProviderError, ProviderReply};
use crate::config::{ProviderConfig, ProviderFamily, ProviderId};

/// One conversational-AI backend.
///
/// Implementations are pure request-builders/response-parsers over a shared
/// HTTP client; they hold no mutable state, so `send` is safe to call
/// concurrently.
#[async_trait]
pub trait ChatProvider: Send + Sync + std::fmt::Debug {
    /// The provider id this instance serves.
    fn id(&self) -> ProviderId;

    /// Send one user message and return the normalized reply text.
    async fn send(&self, message: &OutboundMessage) -> ChatResult<ProviderReply>;
}

/// Construct the adapter for a provider id.
///
/// The match is exhaustive over [`ProviderFamily`]: adding a provider id
/// without an adapter does not compile.
pub fn provider_for(id: ProviderId, config: &ProviderConfig) -> Arc<dyn ChatProvider> {
    match id.family() {
        ProviderFamily::OpenAiCompatible => Arc::new(OpenAiCompatibleProvider::new(id, config)),
        ProviderFamily::Anthropic => Arc::new(AnthropicProvider::new(config)),
        ProviderFamily::Google => Arc::new(GoogleProvider::new(config)),
    }
}

/// Error payload shape shared by all three provider families:
/// `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Map a non-2xx response to [`ProviderError::HttpStatus`].
///
/// Prefers the provider's nested `error.message`; falls back to the raw
/// status text when the body is not JSON or carries no message.
pub(crate) fn status_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unrecognized status")
                .to_string()
        });

    ProviderError::HttpStatus {
        status: status.as_u16(),
        detail,
    }
}

/// Trim an extracted reply, rejecting blank text as a malformed body.
pub(crate) fn normalize_text(text: Option<String>, missing: &str) -> ChatResult<String> {
    text.map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ProviderError::MalformedBody(missing.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_error_extracts_nested_message() {
        let err = status_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"message":"Invalid API key","type":"auth_error"}}"#,
        );
        assert_eq!(
            err,
            ProviderError::HttpStatus {
                status: 401,
                detail: "Invalid API key".into()
            }
        );
    }

    #[test]
    fn status_error_falls_back_to_status_text() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(
            err,
            ProviderError::HttpStatus {
                status: 500,
                detail: "Internal Server Error".into()
            }
        );
    }

    #[test]
    fn status_error_ignores_empty_message_field() {
        let err = status_error(StatusCode::FORBIDDEN, r#"{"error":{"message":""}}"#);
        assert_eq!(
            err,
            ProviderError::HttpStatus {
                status: 403,
                detail: "Forbidden".into()
            }
        );
    }

    #[test]
    fn normalize_text_trims_and_rejects_blank() {
        assert_eq!(
            normalize_text(Some(" Hi there ".into()), "missing").unwrap(),
            "Hi there"
        );
        assert!(matches!(
            normalize_text(Some("   ".into()), "missing"),
            Err(ProviderError::MalformedBody(_))
        ));
        assert!(matches!(
            normalize_text(None, "missing"),
            Err(ProviderError::MalformedBody(_))
        ));
    }
}
