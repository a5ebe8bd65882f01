//! Web layer for the travel enquiry assistant.
//!
//! Serves the chat page and the `/ask` endpoint that feeds queries to the
//! dispatcher.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
