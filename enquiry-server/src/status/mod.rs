//! Live train status lookup.
//!
//! Queries an external status API for a 5-digit train number and normalizes
//! the answer into a [`StatusReport`]. Failures never escape this module:
//!
//! - transport errors, timeouts, non-200 responses and undecodable bodies
//!   produce the fixed fallback report
//! - responses with some fields missing are completed field by field from
//!   the same fallback
//!
//! The report carries a [`ResultStatus`](crate::domain::ResultStatus) so
//! callers can still tell live data from fallback values.

mod client;
mod error;
mod report;
mod types;

pub use client::{StatusClient, StatusConfig};
pub use error::StatusError;
pub use report::{
    FALLBACK_CURRENT_STATION, FALLBACK_DELAY_MINUTES, FALLBACK_LAST_UPDATED, FALLBACK_START_DATE,
    FALLBACK_TRAIN_NAME, FALLBACK_TRAIN_NUMBER, StatusReport,
};
pub use types::{StatusEnvelope, TrainStatusData};
