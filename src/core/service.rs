//! Default implementation of the ChatService trait.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::api::{ChatService, OutboundMessage};
use crate::config::{ConfigStore, ProviderId};
use crate::core::fallback::demo_reply;
use crate::spi::{provider_for, ChatProvider};

/// Routes each message to the configured provider, degrading to the demo
/// responder whenever the live path is absent or fails.
///
/// The adapter is built once at construction; `get_reply` shares only that
/// immutable state, so concurrent calls need no synchronization. An adapter
/// exists only when the active provider has a credential; with an empty
/// key, no network call is ever attempted.
#[derive(Debug)]
pub struct DefaultChatService {
    active_id: Option<ProviderId>,
    provider: Option<Arc<dyn ChatProvider>>,
}

impl DefaultChatService {
    /// Build the service for the store's active provider.
    pub fn new(store: &ConfigStore) -> Self {
        match store.active() {
            Some((id, config)) if config.is_configured() => Self {
                active_id: Some(id),
                provider: Some(provider_for(id, config)),
            },
            Some((id, _)) => {
                debug!(provider = %id, "provider selected but credential is empty; demo replies only");
                Self {
                    active_id: Some(id),
                    provider: None,
                }
            }
            None => Self {
                active_id: None,
                provider: None,
            },
        }
    }

    /// Build the service around an explicit provider instance.
    pub fn with_provider(id: ProviderId, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            active_id: Some(id),
            provider: Some(provider),
        }
    }

    /// A service that only ever answers with demo replies.
    pub fn demo_only() -> Self {
        Self {
            active_id: None,
            provider: None,
        }
    }
}

#[async_trait]
impl ChatService for DefaultChatService {
    async fn get_reply(&self, message: &OutboundMessage) -> String {
        let Some(provider) = &self.provider else {
            return demo_reply(message.text(), self.active_id);
        };

        match provider.send(message).await {
            Ok(reply) => reply.text,
            Err(err) => {
                warn!(provider = %provider.id(), error = %err, "provider request failed; falling back to demo reply");
                demo_reply(message.text(), self.active_id)
            }
        }
    }

    fn active_provider(&self) -> Option<ProviderId> {
        self.active_id
    }
}
