//! Application state for the web layer.

use std::sync::Arc;

use crate::conversation::SessionStore;
use crate::dispatch::Dispatcher;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Query dispatcher over the loaded datasets and API clients
    pub dispatcher: Arc<Dispatcher>,

    /// Per-session conversations
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(dispatcher: Dispatcher, sessions: SessionStore) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            sessions: Arc::new(sessions),
        }
    }
}
