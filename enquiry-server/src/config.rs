//! Process configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use crate::llm::DEFAULT_MODEL;

const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

/// Errors from invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name}: invalid listen address {value:?}")]
    InvalidBind { name: &'static str, value: String },

    #[error("{name}: expected a date as YYYYMMDD, got {value:?}")]
    InvalidDate { name: &'static str, value: String },

    #[error("{name}: expected a whole number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Settings for the whole server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Model API key; `None` when unset
    pub groq_api_key: Option<String>,
    /// Status API key; `None` when unset
    pub rapidapi_key: Option<String>,
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub model: String,
    /// Pinned departure date for status lookups; today when `None`
    pub departure_date: Option<NaiveDate>,
    pub session_idle: Duration,
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is normal
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let groq_api_key = var("GROQ_API_KEY").or_else(|| var("GroqAPIKey"));
        let rapidapi_key = var("RAPIDAPI_KEY");

        let bind_value = var("ENQUIRY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value
            .parse()
            .map_err(|_| ConfigError::InvalidBind {
                name: "ENQUIRY_BIND",
                value: bind_value.clone(),
            })?;

        let departure_date = var("STATUS_DEPARTURE_DATE")
            .map(|value| {
                NaiveDate::parse_from_str(&value, "%Y%m%d").map_err(|_| ConfigError::InvalidDate {
                    name: "STATUS_DEPARTURE_DATE",
                    value,
                })
            })
            .transpose()?;

        let session_idle_secs = match var("ENQUIRY_SESSION_IDLE_SECS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                name: "ENQUIRY_SESSION_IDLE_SECS",
                value,
            })?,
            None => DEFAULT_SESSION_IDLE_SECS,
        };

        Ok(Self {
            groq_api_key,
            rapidapi_key,
            bind,
            data_dir: PathBuf::from(var("ENQUIRY_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.into())),
            static_dir: PathBuf::from(
                var("ENQUIRY_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into()),
            ),
            model: var("ENQUIRY_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            departure_date,
            session_idle: Duration::from_secs(session_idle_secs),
        })
    }

    /// Directories searched for dataset files, in order.
    pub fn dataset_dirs(&self) -> Vec<PathBuf> {
        vec![self.data_dir.clone(), PathBuf::from(".")]
    }
}
