//! Request field coercion shared by the controllers and request DTOs.
//!
//! Every check here runs before the data context is touched, so a request
//! rejected here never reaches storage.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::api_error::ApiError;

/// A positive integer identifier from path or query text.
pub fn parse_id(raw: Option<&str>) -> Option<u64> {
    raw.map(str::trim)
        .and_then(|text| text.parse::<u64>().ok())
        .filter(|id| *id > 0)
}

/// A positive integer identifier from a JSON body. Numbers and numeric
/// strings are both accepted; `3.0` counts, `3.5` does not.
pub fn id_from_json(value: Option<&Value>) -> Option<u64> {
    let id = match value? {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0 && *float >= 1.0)
                .map(|float| float as u64)
        }),
        Value::String(text) => parse_id(Some(text)),
        _ => None,
    };
    id.filter(|id| *id > 0)
}

/// Like [`id_from_json`], for fields that may be left out. Absent, `null`
/// and blank strings mean "unset"; anything else must be a valid id.
pub fn optional_id(field: &str, value: Option<Value>) -> Result<Option<u64>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(raw) => id_from_json(Some(&raw))
            .map(Some)
            .ok_or_else(|| ApiError::Validation(format!("{field} must be a valid number"))),
    }
}

/// The trimmed value, or None when absent or blank.
pub fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// The value untouched, or None when absent or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// RFC 3339 timestamps or bare `YYYY-MM-DD` dates (taken as midnight UTC).
/// Only the format is checked, never the range.
pub fn parse_timestamp(field: &str, raw: Option<String>) -> Result<Option<DateTime<Utc>>, ApiError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(timestamp.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Some(midnight.and_utc()))
        .ok_or_else(|| ApiError::Validation(format!("{field} must be an ISO 8601 date or timestamp")))
}
