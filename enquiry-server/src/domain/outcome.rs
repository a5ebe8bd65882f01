//! Answer classification shared by the dispatcher and the web layer.

use serde::Serialize;

/// How trustworthy an answer is.
///
/// Every answer is still a renderable string; this tag lets the boundary
/// layer tell real data apart from degraded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// Built entirely from real data.
    Ok,
    /// Partial data, or an error description returned as the answer.
    Degraded,
    /// The static fallback status report.
    FallbackUsed,
}

/// Which handling path produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    /// HTML schedule report (trains or buses).
    Schedule,
    /// Plain-text live status report.
    Status,
    /// Language-model reply.
    Assistant,
    /// Error text from a failed language-model call.
    Error,
    /// Placeholder for a request without a query.
    NoQuery,
}
