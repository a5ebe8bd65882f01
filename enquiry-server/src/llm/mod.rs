//! Language-model fallback client.
//!
//! Queries that are neither a known route nor a train number are answered by
//! a chat-completions model. The [`LlmBackend`] trait is the seam between the
//! dispatcher and the concrete HTTP client.

mod backend;
mod error;
mod groq;

pub use backend::LlmBackend;
pub use error::LlmError;
pub use groq::{DEFAULT_MODEL, GroqClient, GroqConfig};
