//! Status API response DTOs.
//!
//! Every field is optional: the API omits fields freely, and missing ones are
//! filled from the fallback report one by one.

use serde::Deserialize;

use crate::domain::lenient::{opt_minutes, opt_text};

/// Top-level response from the train status endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusEnvelope {
    /// Status payload; absent or null when the lookup failed upstream.
    #[serde(default)]
    pub data: Option<TrainStatusData>,
}

/// Live running status of one train.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrainStatusData {
    #[serde(default, deserialize_with = "opt_text")]
    pub train_number: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub train_name: Option<String>,

    /// Date the run started, as sent by the API.
    #[serde(default, deserialize_with = "opt_text")]
    pub start_date: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub current_station_name: Option<String>,

    #[serde(default, deserialize_with = "opt_text")]
    pub last_updated_time: Option<String>,

    #[serde(default, deserialize_with = "opt_minutes")]
    pub delay_in_minutes: Option<i64>,
}

impl TrainStatusData {
    /// Whether every field the report needs is present.
    pub fn is_complete(&self) -> bool {
        self.train_number.is_some()
            && self.train_name.is_some()
            && self.start_date.is_some()
            && self.current_station_name.is_some()
            && self.last_updated_time.is_some()
            && self.delay_in_minutes.is_some()
    }
}
