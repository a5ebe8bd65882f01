//! Live status client errors.
//!
//! None of these reach the caller of `fetch_status`; they decide whether the
//! fallback report is used and are logged.

/// Errors from the status HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Body decoded but carried no `data` object
    #[error("response has no status data")]
    MissingData,

    /// Credentials could not be turned into request headers
    #[error("invalid API key format")]
    InvalidApiKey,

    /// Configured host is not a valid header value
    #[error("invalid RapidAPI host")]
    InvalidHost,
}
