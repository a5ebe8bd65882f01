//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::dispatch::Answer;
use crate::domain::lenient::opt_text;
use crate::domain::{AnswerKind, ResultStatus};

/// Body of `POST /ask`, as JSON or a urlencoded form.
///
/// Fields decode independently: scalars are read as text, and an array or
/// object query counts as missing without losing the session id.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    /// The user's question
    #[serde(default, deserialize_with = "opt_text")]
    pub query: Option<String>,

    /// Session to continue; a new one is started when absent
    #[serde(default, deserialize_with = "opt_text")]
    pub session_id: Option<String>,
}

impl AskRequest {
    /// The query, unless it is missing or blank.
    ///
    /// Whitespace-only input deliberately counts as missing.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }
}

/// Response to `POST /ask`.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// HTML when `kind` is `schedule`, plain text otherwise
    pub answer: String,

    pub kind: AnswerKind,

    pub status: ResultStatus,

    /// Session the answer belongs to; send it back to continue the chat
    pub session_id: String,
}

impl AskResponse {
    /// Build the response for an answer in the given session.
    pub fn new(answer: Answer, session_id: String) -> Self {
        Self {
            answer: answer.text,
            kind: answer.kind,
            status: answer.status,
            session_id,
        }
    }
}
