//! Mock chat provider for testing.
//!
//! `MockProvider` implements `ChatProvider` without touching the network.
//! Behaviour is configurable and calls are counted for test assertions.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::api::{ChatResult, OutboundMessage, ProviderError, ProviderReply};
use crate::config::ProviderId;
use crate::spi::ChatProvider;

/// Behaviour when `send()` is called.
#[derive(Debug, Clone)]
pub enum MockBehaviour {
    /// Echo the user message back (default).
    Echo,
    /// Return a fixed reply string.
    Fixed(String),
    /// Always fail with this error.
    Fail(ProviderError),
}

impl Default for MockBehaviour {
    fn default() -> Self {
        Self::Echo
    }
}

/// Mock implementation of [`ChatProvider`].
#[derive(Debug)]
pub struct MockProvider {
    id: ProviderId,
    behaviour: MockBehaviour,
    send_calls: AtomicU64,
}

impl MockProvider {
    /// Create a mock that echoes user input back, reporting as groq.
    pub fn new() -> Self {
        Self {
            id: ProviderId::Groq,
            behaviour: MockBehaviour::Echo,
            send_calls: AtomicU64::new(0),
        }
    }

    /// Set the provider id reported by `id()`.
    pub fn with_id(mut self, id: ProviderId) -> Self {
        self.id = id;
        self
    }

    /// Set the response behaviour.
    pub fn with_behaviour(mut self, behaviour: MockBehaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    /// Number of times `send()` was called.
    pub fn send_calls(&self) -> u64 {
        self.send_calls.load(Ordering::Relaxed)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    async fn send(&self, message: &OutboundMessage) -> ChatResult<ProviderReply> {
        self.send_calls.fetch_add(1, Ordering::Relaxed);
        match &self.behaviour {
            MockBehaviour::Echo => Ok(ProviderReply {
                text: message.text().to_string(),
            }),
            MockBehaviour::Fixed(text) => Ok(ProviderReply { text: text.clone() }),
            MockBehaviour::Fail(error) => Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> OutboundMessage {
        OutboundMessage::new(text).unwrap()
    }

    #[tokio::test]
    async fn echo_behaviour() {
        let mock = MockProvider::new();
        let reply = mock.send(&message("hello")).await.unwrap();
        assert_eq!(reply.text, "hello");
    }

    #[tokio::test]
    async fn fixed_behaviour() {
        let mock = MockProvider::new().with_behaviour(MockBehaviour::Fixed("canned".into()));
        let reply = mock.send(&message("anything")).await.unwrap();
        assert_eq!(reply.text, "canned");
    }

    #[tokio::test]
    async fn fail_behaviour_and_call_counter() {
        let mock = MockProvider::new().with_behaviour(MockBehaviour::Fail(
            ProviderError::Network("down".into()),
        ));
        assert_eq!(mock.send_calls(), 0);

        let err = mock.send(&message("hi")).await.unwrap_err();
        assert_eq!(err, ProviderError::Network("down".into()));

        mock.send(&message("hi")).await.unwrap_err();
        assert_eq!(mock.send_calls(), 2);
    }

    #[tokio::test]
    async fn reported_id_is_configurable() {
        let mock = MockProvider::new().with_id(ProviderId::Google);
        assert_eq!(mock.id(), ProviderId::Google);
    }
}
