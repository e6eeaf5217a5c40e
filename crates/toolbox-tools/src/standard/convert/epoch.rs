//! Unix timestamps to human-readable dates.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

/// Millisecond timestamps above this (early 1980) with 13+ digits are
/// read as milliseconds.
pub const MILLIS_THRESHOLD: i64 = 315_576_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EpochUnit {
    Seconds,
    Milliseconds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpochInput {
    pub timestamp: String,
}

impl ToolConfig for EpochInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self { timestamp: input })
    }
}

/// Guess whether a timestamp string counts seconds or milliseconds.
pub fn detect_unit(digits: &str, value: i64) -> EpochUnit {
    if digits.trim_start_matches('-').len() >= 13 && value > MILLIS_THRESHOLD {
        EpochUnit::Milliseconds
    } else {
        EpochUnit::Seconds
    }
}

/// Parse an epoch timestamp into a UTC date.
pub fn parse_epoch(input: &str) -> Result<(DateTime<Utc>, EpochUnit), String> {
    let input = input.trim();
    let value: i64 = input
        .parse()
        .map_err(|_| "Please enter a valid epoch timestamp".to_string())?;
    let unit = detect_unit(input, value);
    let millis = match unit {
        EpochUnit::Milliseconds => Some(value),
        EpochUnit::Seconds => value.checked_mul(1000),
    };
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|date| (date, unit))
        .ok_or_else(|| "Timestamp is out of range".to_string())
}

/// `Thu, 01 Jan 1970 00:00:00 GMT`
pub fn format_utc_string(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EpochConverterTool;

impl Tool for EpochConverterTool {
    fn name(&self) -> &str {
        "epoch-to-human-date-converter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        EpochInput::parse(input)
            .and_then(|config| {
                parse_epoch(&config.timestamp)
                    .map(|(date, unit)| {
                        serde_json::json!({
                            "unit": unit,
                            "iso": date.to_rfc3339_opts(SecondsFormat::Millis, true),
                            "utc": format_utc_string(&date),
                            "seconds": date.timestamp(),
                            "milliseconds": date.timestamp_millis(),
                        })
                    })
                    .map_err(invalid_input)
            })
            .into()
    }
}
