//! Query classification and dispatch.
//!
//! Every query goes down exactly one path, tried in this order:
//!
//! 1. a train route mentioned in the query → train schedule report
//! 2. a bus route mentioned in the query → bus schedule report
//! 3. a standalone 5-digit number → live status report for that train
//! 4. anything else → language-model reply within the session's conversation
//!
//! The first dataset with any match wins; there is no ranking between them.
//! Nothing here returns an error: every path ends in an [`Answer`].

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, warn};

use crate::conversation::Conversation;
use crate::domain::{AnswerKind, ResultStatus};
use crate::llm::LlmBackend;
use crate::schedule::{Dataset, format_report};
use crate::status::{StatusClient, StatusReport};

/// Answer given when a request carries no query.
pub const NO_QUERY_ANSWER: &str = "No query provided";

/// Exactly five ASCII digits bounded by a non-digit or the string edge.
static TRAIN_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]{5})(?:[^0-9]|$)").expect("train number pattern is valid")
});

/// Find the first standalone 5-digit number in `query`.
///
/// ```
/// use enquiry_server::dispatch::extract_train_number;
///
/// assert_eq!(extract_train_number("status of train 12345"), Some("12345"));
/// assert_eq!(extract_train_number("call 9876543210"), None);
/// ```
pub fn extract_train_number(query: &str) -> Option<&str> {
    TRAIN_NUMBER
        .captures(query)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The rendered result of handling one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// HTML for schedule reports, plain text otherwise.
    pub text: String,
    pub kind: AnswerKind,
    pub status: ResultStatus,
}

impl Answer {
    /// The placeholder answer for a missing query.
    pub fn no_query() -> Self {
        Self {
            text: NO_QUERY_ANSWER.to_string(),
            kind: AnswerKind::NoQuery,
            status: ResultStatus::Ok,
        }
    }

    fn schedule(html: String) -> Self {
        Self {
            text: html,
            kind: AnswerKind::Schedule,
            status: ResultStatus::Ok,
        }
    }

    fn status(report: StatusReport) -> Self {
        Self {
            text: report.to_string(),
            kind: AnswerKind::Status,
            status: report.status,
        }
    }

    fn assistant(reply: String) -> Self {
        Self {
            text: reply,
            kind: AnswerKind::Assistant,
            status: ResultStatus::Ok,
        }
    }

    fn error(message: String) -> Self {
        Self {
            text: message,
            kind: AnswerKind::Error,
            status: ResultStatus::Degraded,
        }
    }
}

/// Routes queries to schedule lookup, live status or the language model.
///
/// Holds no conversation state: the caller passes in the session's
/// [`Conversation`] on every call.
pub struct Dispatcher {
    trains: Arc<Dataset>,
    buses: Arc<Dataset>,
    status: StatusClient,
    llm: Arc<dyn LlmBackend>,
}

impl Dispatcher {
    /// Create a dispatcher over the given datasets and clients.
    pub fn new(
        trains: Dataset,
        buses: Dataset,
        status: StatusClient,
        llm: Arc<dyn LlmBackend>,
    ) -> Self {
        Self {
            trains: Arc::new(trains),
            buses: Arc::new(buses),
            status,
            llm,
        }
    }

    /// Handle one query.
    ///
    /// Only the language-model path touches `conversation`: it appends the
    /// query as a user message and, on success, the reply as an assistant
    /// message.
    pub async fn dispatch(&self, query: &str, conversation: &mut Conversation) -> Answer {
        if let Some(answer) = schedule_answer(&self.trains, query) {
            return answer;
        }

        if let Some(answer) = schedule_answer(&self.buses, query) {
            return answer;
        }

        if let Some(train_number) = extract_train_number(query) {
            debug!(train_number, "dispatching to live status");
            let report = self.status.fetch_status(train_number).await;
            return Answer::status(report);
        }

        self.ask_model(query, conversation).await
    }

    async fn ask_model(&self, query: &str, conversation: &mut Conversation) -> Answer {
        debug!(model = self.llm.model(), history = conversation.len(), "dispatching to model");

        conversation.push_user(query);

        match self.llm.complete(conversation.messages()).await {
            Ok(reply) => {
                conversation.push_assistant(reply.clone());
                Answer::assistant(reply)
            }
            Err(e) => {
                warn!(model = self.llm.model(), error = %e, "model call failed");
                Answer::error(format!("Error: {e}"))
            }
        }
    }
}

/// Render the schedule report for `dataset`, if anything in it matches.
fn schedule_answer(dataset: &Dataset, query: &str) -> Option<Answer> {
    let matches = dataset.matching(query);

    match format_report(dataset.mode(), &matches) {
        Ok(Some(html)) => {
            debug!(mode = %dataset.mode(), matches = matches.len(), "dispatching to schedule");
            Some(Answer::schedule(html))
        }
        Ok(None) => None,
        Err(e) => {
            warn!(mode = %dataset.mode(), error = %e, "failed to render schedule report");
            Some(Answer::error(format!("Template error: {e}")))
        }
    }
}
