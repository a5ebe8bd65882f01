//! Conversation state for the language-model fallback.

mod history;
mod message;
mod store;

pub use history::{Conversation, SYSTEM_PROMPT};
pub use message::{Message, Role};
pub use store::{
    Session, SessionConfig, SessionStore, SharedConversation, is_valid_session_id, new_session_id,
};
