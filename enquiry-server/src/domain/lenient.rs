//! Lenient field decoding for third-party JSON.
//!
//! Both the schedule datasets and the status API are loose about types: a
//! train number may be `"12051"` or `12051`. These helpers accept any scalar
//! and treat anything else as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode an optional scalar as text. Objects and arrays become `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

/// Decode an optional whole number of minutes from a number or numeric string.
pub fn opt_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
