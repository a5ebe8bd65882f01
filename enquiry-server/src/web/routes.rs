//! HTTP route handlers.

use std::convert::Infallible;
use std::path::Path;

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{FromRequest, Request, State},
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::debug;

use crate::dispatch::Answer;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/ask", post(ask))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Chat page.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Answer one query.
///
/// Always responds 200; failures show up in the answer's `kind` and `status`.
async fn ask(State(state): State<AppState>, AskPayload(request): AskPayload) -> Json<AskResponse> {
    let session = state.sessions.session(request.session_id.as_deref()).await;

    let answer = match request.query() {
        Some(query) => {
            let mut conversation = session.conversation.lock().await;
            state.dispatcher.dispatch(query, &mut conversation).await
        }
        None => Answer::no_query(),
    };

    Json(AskResponse::new(answer, session.id))
}

/// `/ask` body, accepted as JSON or as a urlencoded form.
///
/// An unreadable body is treated as an empty request rather than rejected.
struct AskPayload(AskRequest);

#[axum::async_trait]
impl<S> FromRequest<S> for AskPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("application/json"));

        let request = if is_json {
            Json::<AskRequest>::from_request(req, state)
                .await
                .map(|Json(request)| request)
                .map_err(|e| e.body_text())
        } else {
            Form::<AskRequest>::from_request(req, state)
                .await
                .map(|Form(request)| request)
                .map_err(|e| e.body_text())
        };

        Ok(Self(request.unwrap_or_else(|reason| {
            debug!(%reason, "unreadable ask body");
            AskRequest::default()
        })))
    }
}
