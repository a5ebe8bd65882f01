//! Language-model backend abstraction.

use async_trait::async_trait;

use crate::conversation::Message;

use super::error::LlmError;

/// A chat-completion backend.
///
/// The backend is stateless: every call receives the entire history and
/// returns one assistant reply.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generate the next assistant reply for `messages`.
    async fn complete(&self, messages: &[Message]) -> Result<String, LlmError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
