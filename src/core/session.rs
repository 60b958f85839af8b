//! Conversation transcript and the submit flow.

use std::sync::Arc;

use crate::api::{ChatService, DisplayMessage, OutboundMessage, Sender};

/// One user-facing chat session.
///
/// Holds the turn-by-turn transcript and forwards each submission to the
/// service, one message at a time. The transcript exists for display only:
/// prior turns are never sent to a provider.
pub struct ConversationSession {
    service: Arc<dyn ChatService>,
    transcript: Vec<DisplayMessage>,
}

impl ConversationSession {
    pub fn new(service: Arc<dyn ChatService>) -> Self {
        Self {
            service,
            transcript: Vec::new(),
        }
    }

    /// Submit one user input and return the reply.
    ///
    /// Blank input (empty after trim) is ignored and returns `None`
    /// without touching the transcript. Otherwise both the user entry and
    /// the bot reply are appended, in that order.
    pub async fn submit(&mut self, input: &str) -> Option<String> {
        let message = OutboundMessage::new(input)?;

        self.transcript.push(DisplayMessage::user(message.text()));
        let reply = self.service.get_reply(&message).await;
        self.transcript.push(DisplayMessage::bot(&reply));

        Some(reply)
    }

    /// The transcript so far, oldest first.
    pub fn transcript(&self) -> &[DisplayMessage] {
        &self.transcript
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// Discard the transcript.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// Format the transcript for display.
    pub fn format_display(&self) -> String {
        let mut output = String::new();
        for entry in &self.transcript {
            let label = match entry.sender {
                Sender::User => "You",
                Sender::Bot => "AI",
            };
            output.push_str(&format!("[{}] {}\n", label, entry.text));
        }
        if output.is_empty() {
            output.push_str("(no chat history)");
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::DefaultChatService;
    use crate::testing::{MockBehaviour, MockProvider};
    use crate::config::ProviderId;

    fn echo_session() -> ConversationSession {
        let mock = Arc::new(MockProvider::new().with_behaviour(MockBehaviour::Echo));
        let service = DefaultChatService::with_provider(ProviderId::Groq, mock);
        ConversationSession::new(Arc::new(service))
    }

    #[tokio::test]
    async fn submit_appends_user_then_bot() {
        let mut session = echo_session();
        let reply = session.submit("what is gravity").await;

        assert_eq!(reply.as_deref(), Some("what is gravity"));
        assert_eq!(session.len(), 2);
        assert_eq!(session.transcript()[0], DisplayMessage::user("what is gravity"));
        assert_eq!(session.transcript()[1], DisplayMessage::bot("what is gravity"));
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut session = echo_session();
        assert!(session.submit("   ").await.is_none());
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn submit_trims_before_recording() {
        let mut session = echo_session();
        session.submit("  spaced out  ").await;
        assert_eq!(session.transcript()[0].text, "spaced out");
    }

    #[tokio::test]
    async fn clear_discards_the_transcript() {
        let mut session = echo_session();
        session.submit("hello").await;
        assert!(!session.is_empty());

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.format_display(), "(no chat history)");
    }

    #[tokio::test]
    async fn format_display_labels_both_sides() {
        let mut session = echo_session();
        session.submit("hi").await;

        let display = session.format_display();
        assert!(display.starts_with("[You] hi\n"));
        assert!(display.contains("[AI] "));
    }
}
