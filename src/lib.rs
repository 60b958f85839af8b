//! tutor-chat - unified client for conversational-AI providers.
//!
//! One configuration-selected provider answers each user message; when no
//! provider is configured, reachable, or healthy, a deterministic demo
//! responder answers instead. The caller-facing contract is a single
//! infallible operation: [`ChatService::get_reply`] always resolves to a
//! display-ready string, never to an error.
//!
//! # Configuration-Driven Design
//!
//! Provider selection is driven by configuration, not code:
//!
//! ```yaml
//! provider: groq
//! groq:
//!   api_key: gsk-...
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tutor_chat::create_session_from_path;
//!
//! let mut session = create_session_from_path("config.yml")?;
//! let reply = session.submit("Can you help me with math?").await;
//! ```
//!
//! # Architecture (SEA Pattern)
//!
//! ```text
//! L5 Facade   - lib.rs (this file): re-exports, factories
//! L4 Core     - core/: DefaultChatService, demo fallback, session
//! L3 API      - api/: ChatService trait, types, error taxonomy
//! L2 SPI      - spi/: ChatProvider trait + the three wire adapters
//! L1 Common   - config/: ProviderId, ProviderConfig, ConfigStore
//! ```

use std::path::Path;
use std::sync::Arc;

// =============================================================================
// Modules
// =============================================================================

pub mod api;
pub mod config;
pub mod core;
pub mod spi;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// =============================================================================
// Public API
// =============================================================================

pub use api::{
    ChatResult, ChatService, DisplayMessage, OutboundMessage, ProviderError, ProviderReply,
    Sender,
};
pub use config::{
    AppConfig, ConfigError, ConfigStore, ProviderConfig, ProviderFamily, ProviderId,
};
pub use self::core::fallback::demo_reply;
pub use self::core::prompt::tutor_system_prompt;
pub use self::core::{ConversationSession, DefaultChatService};
pub use spi::{
    provider_for, AnthropicProvider, ChatProvider, GoogleProvider, OpenAiCompatibleProvider,
};

#[cfg(any(test, feature = "testing"))]
pub use testing::{MockBehaviour, MockProvider};

// =============================================================================
// Factory Functions
// =============================================================================

/// Create the chat service for a resolved configuration store.
pub fn create_service(store: &ConfigStore) -> DefaultChatService {
    DefaultChatService::new(store)
}

/// Create a conversation session backed by the store's active provider.
pub fn create_session(store: &ConfigStore) -> ConversationSession {
    ConversationSession::new(Arc::new(create_service(store)))
}

/// Load the configuration file at `path` and create a session from it.
///
/// The only fallible step is reading and parsing the file; a selector with
/// no matching provider section still succeeds, in demo-only mode.
pub fn create_session_from_path(path: impl AsRef<Path>) -> Result<ConversationSession, ConfigError> {
    let store = ConfigStore::load(path)?;
    Ok(create_session(&store))
}
