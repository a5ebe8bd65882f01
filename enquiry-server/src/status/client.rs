//! Live train status HTTP client.
//!
//! Talks to the RapidAPI-hosted Indian Railways status endpoint. Any failure
//! is absorbed: `fetch_status` always returns a renderable report.

use chrono::{Local, NaiveDate};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

use super::error::StatusError;
use super::report::StatusReport;
use super::types::StatusEnvelope;

/// Default base URL for the status API.
const DEFAULT_BASE_URL: &str = "https://indian-railway-irctc.p.rapidapi.com";

/// Host the API key is issued for.
const DEFAULT_HOST: &str = "indian-railway-irctc.p.rapidapi.com";

/// Path of the train status endpoint.
const STATUS_PATH: &str = "/api/trains/v1/train/status";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the status client.
#[derive(Debug, Clone)]
pub struct StatusConfig {
    /// RapidAPI key
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Value of the `X-RapidAPI-Host` header
    pub host: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Fixed departure date; today's local date when unset
    pub departure_date: Option<NaiveDate>,
}

impl StatusConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            departure_date: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Pin the departure date sent with every lookup.
    pub fn with_departure_date(mut self, date: NaiveDate) -> Self {
        self.departure_date = Some(date);
        self
    }
}

/// Live train status client.
#[derive(Debug, Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    base_url: String,
    departure_date: Option<NaiveDate>,
}

impl StatusClient {
    /// Create a new status client with the given configuration.
    pub fn new(config: StatusConfig) -> Result<Self, StatusError> {
        let mut headers = HeaderMap::new();

        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| StatusError::InvalidApiKey)?;
        let host = HeaderValue::from_str(&config.host).map_err(|_| StatusError::InvalidHost)?;
        headers.insert(HeaderName::from_static("x-rapidapi-key"), api_key);
        headers.insert(HeaderName::from_static("x-rapidapi-host"), host);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            departure_date: config.departure_date,
        })
    }

    /// Date sent as `departure_date`.
    fn departure_date(&self) -> NaiveDate {
        self.departure_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Fetch the live status of a train.
    ///
    /// Never fails. A transport error, timeout, non-success status or
    /// undecodable body yields [`StatusReport::fallback`]; a response with
    /// some fields missing fills just those fields from the fallback.
    pub async fn fetch_status(&self, train_number: &str) -> StatusReport {
        match self.fetch_live(train_number).await {
            Ok(envelope) => match envelope.data {
                Some(data) => StatusReport::from_data(data),
                None => {
                    warn!(train_number, error = %StatusError::MissingData, "using fallback status");
                    StatusReport::fallback()
                }
            },
            Err(e) => {
                warn!(train_number, error = %e, "using fallback status");
                StatusReport::fallback()
            }
        }
    }

    /// Perform the raw status request.
    pub async fn fetch_live(&self, train_number: &str) -> Result<StatusEnvelope, StatusError> {
        let url = format!("{}{}", self.base_url, STATUS_PATH);
        let date = self.departure_date().format("%Y%m%d").to_string();

        debug!(train_number, %date, "requesting live status");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("departure_date", date.as_str()),
                ("isH5", "true"),
                ("client", "web"),
                ("train_number", train_number),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StatusError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| StatusError::Json {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResultStatus;

    #[test]
    fn config_builder() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 18).unwrap();
        let config = StatusConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(2)
            .with_departure_date(date);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.departure_date, Some(date));
    }

    #[test]
    fn config_defaults() {
        let config = StatusConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.departure_date, None);
    }

    #[test]
    fn client_creation() {
        assert!(StatusClient::new(StatusConfig::new("test-key")).is_ok());
        assert!(StatusClient::new(StatusConfig::new("")).is_ok());
    }

    #[test]
    fn invalid_key_rejected() {
        let result = StatusClient::new(StatusConfig::new("bad\nkey"));
        assert!(matches!(result, Err(StatusError::InvalidApiKey)));
    }

    #[test]
    fn invalid_host_rejected() {
        let mut config = StatusConfig::new("test-key");
        config.host = "bad\nhost".into();

        let result = StatusClient::new(config);
        assert!(matches!(result, Err(StatusError::InvalidHost)));
    }

    #[test]
    fn pinned_departure_date() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 18).unwrap();
        let client = StatusClient::new(StatusConfig::new("k").with_departure_date(date)).unwrap();
        assert_eq!(client.departure_date(), date);
    }

    #[tokio::test]
    async fn unreachable_api_falls_back() {
        // Port 1 on loopback refuses connections
        let config = StatusConfig::new("k")
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(2);
        let client = StatusClient::new(config).unwrap();

        let report = client.fetch_status("12345").await;
        assert_eq!(report, StatusReport::fallback());
        assert_eq!(report.status, ResultStatus::FallbackUsed);
    }
}
