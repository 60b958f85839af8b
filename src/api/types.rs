/// Shared request/response types for the chat service.

/// Originator of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single entry in the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage {
    pub sender: Sender,
    pub text: String,
}

impl DisplayMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// A user submission on its way to a provider.
///
/// Guaranteed non-empty after trimming; construct via [`OutboundMessage::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    text: String,
}

impl OutboundMessage {
    /// Trim the input and wrap it, or return `None` for blank input.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                text: trimmed.to_string(),
            })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Normalized successful reply from a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub text: String,
}
