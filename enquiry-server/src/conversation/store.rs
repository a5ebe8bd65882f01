//! Per-session conversation storage.
//!
//! Each chat session owns its own [`Conversation`], so histories from
//! different users never mix. Sessions expire after a period of inactivity
//! and the store is capped in size, which bounds memory even though each
//! history is append-only.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::sync::Mutex;
use tracing::debug;

use super::history::{Conversation, SYSTEM_PROMPT};

/// Longest accepted client-supplied session id.
const MAX_SESSION_ID_LEN: usize = 64;

/// A conversation shared between the store and the request handling it.
///
/// The mutex serializes requests within one session.
pub type SharedConversation = Arc<Mutex<Conversation>>;

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Sessions idle for longer than this are dropped.
    pub idle_timeout: Duration,

    /// Maximum number of live sessions.
    pub max_capacity: u64,

    /// Prompt that opens every new conversation.
    pub system_prompt: String,
}

impl SessionConfig {
    /// Set the idle timeout.
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Set the maximum number of sessions.
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(30 * 60),
            max_capacity: 10_000,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}

/// A resolved session for one request.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session id to hand back to the client.
    pub id: String,
    /// The session's conversation.
    pub conversation: SharedConversation,
    /// Whether the session was created by this lookup.
    pub is_new: bool,
}

/// Whether a client-supplied session id is acceptable.
pub fn is_valid_session_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_SESSION_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Generate a fresh session id.
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Expiring map from session id to conversation.
pub struct SessionStore {
    sessions: MokaCache<String, SharedConversation>,
    system_prompt: String,
}

impl SessionStore {
    /// Create a new store with the given configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(config.idle_timeout)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            sessions,
            system_prompt: config.system_prompt.clone(),
        }
    }

    /// Look up a session, creating it if needed.
    ///
    /// A missing or malformed `requested` id gets a freshly generated one. A
    /// well-formed id that is unknown (or has expired) starts a new
    /// conversation under that id.
    pub async fn session(&self, requested: Option<&str>) -> Session {
        let id = match requested.filter(|id| is_valid_session_id(id)) {
            Some(id) => id.to_string(),
            None => new_session_id(),
        };

        let prompt = self.system_prompt.clone();
        let entry = self
            .sessions
            .entry(id.clone())
            .or_insert_with(async move { Arc::new(Mutex::new(Conversation::new(prompt))) })
            .await;

        let is_new = entry.is_fresh();
        if is_new {
            debug!(session_id = %id, "started session");
        }

        Session {
            id,
            conversation: entry.into_value(),
            is_new,
        }
    }

    /// Get an existing session's conversation.
    pub async fn get(&self, id: &str) -> Option<SharedConversation> {
        self.sessions.get(id).await
    }

    /// Drop a session.
    pub async fn end(&self, id: &str) {
        self.sessions.invalidate(id).await;
    }

    /// Approximate number of live sessions.
    pub fn session_count(&self) -> u64 {
        self.sessions.entry_count()
    }
}
