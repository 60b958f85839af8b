//! Chat API - types, errors, and the service contract.

mod error;
mod types;

use async_trait::async_trait;

use crate::config::ProviderId;

pub use error::{ChatResult, ProviderError};
pub use types::{DisplayMessage, OutboundMessage, ProviderReply, Sender};

/// Main chat service interface.
///
/// One operation, one reply. `get_reply` has no error channel at all:
/// whatever happens on the provider side, the caller receives a
/// display-ready string. The live path and the offline demo path are
/// interchangeable from the caller's point of view.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Produce a reply for one user message. Never fails.
    async fn get_reply(&self, message: &OutboundMessage) -> String;

    /// The provider selected by configuration, if any.
    ///
    /// `Some` even when the provider's credential is missing: the demo
    /// responder uses the id to name the provider in its default reply.
    fn active_provider(&self) -> Option<ProviderId>;
}
