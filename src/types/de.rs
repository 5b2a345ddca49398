//! Lenient numeric deserializers for NSE payloads.
//!
//! NSE emits numbers as JSON numbers, as strings (sometimes with thousands
//! separators), as `"-"`, or as `null`. These helpers normalise all of that
//! once, at ingestion, so downstream code only ever sees plain `f64`s.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value as a number, treating anything unusable as `0.0`.
pub fn number_or_zero(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Like [`number_or_zero`], additionally clamping negatives to `0.0`.
pub fn non_negative_or_zero(value: &Value) -> f64 {
    number_or_zero(value).max(0.0)
}

/// `deserialize_with` target: number, numeric string, null or missing → `f64`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, number_or_zero))
}

/// `deserialize_with` target for quantities that can never be negative.
pub fn lenient_non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, non_negative_or_zero))
}

/// `deserialize_with` target: any scalar rendered as a display string.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}
