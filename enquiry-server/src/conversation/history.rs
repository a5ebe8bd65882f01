//! Append-only conversation history.

use super::message::{Message, Role};

/// Prompt that opens every conversation.
pub const SYSTEM_PROMPT: &str = "You are a travel enquiry assistant. Only answer about buses and trains. \
     If unrelated, reply: 'I can only help with bus and train schedules.'";

/// Ordered message history for one chat session.
///
/// Always starts with a system message. Messages are only ever appended; the
/// whole history is sent to the model on each call because the model API is
/// stateless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation with the given system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Full history, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages including the system prompt.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the system prompt is present from the start.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages with the given role.
    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(SYSTEM_PROMPT)
    }
}
