//! Core layer: service implementation, demo fallback, session.

pub mod fallback;
pub mod prompt;
mod service;
mod session;

pub use service::DefaultChatService;
pub use session::ConversationSession;
