//! Stopwatch and countdown formatting.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

/// Longest countdown the HH:MM:SS display can show.
pub const MAX_COUNTDOWN_SECS: u64 = 99 * 3600 + 59 * 60 + 59;

/// `HH:MM:SS.cc` (hundredths, truncated).
pub fn format_stopwatch(millis: u64) -> String {
    let centis = (millis % 1000) / 10;
    let total_secs = millis / 1000;
    format!("{}.{:02}", format_clock(total_secs), centis)
}

/// `HH:MM:SS`. Hours are not wrapped.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lap {
    pub lap: usize,
    pub split: String,
    pub total: String,
}

/// Splits between cumulative lap marks. Marks must not decrease.
pub fn lap_splits(marks: &[u64]) -> Result<Vec<Lap>, String> {
    let mut previous = 0;
    marks
        .iter()
        .enumerate()
        .map(|(i, &mark)| {
            if mark < previous {
                return Err(format!(
                    "Lap {} ends before lap {} ({} ms < {} ms)",
                    i + 1,
                    i,
                    mark,
                    previous
                ));
            }
            let split = mark - previous;
            previous = mark;
            Ok(Lap {
                lap: i + 1,
                split: format_stopwatch(split),
                total: format_stopwatch(mark),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopwatchInput {
    pub elapsed_ms: u64,
    #[serde(default)]
    pub laps: Vec<u64>,
}

impl ToolConfig for StopwatchInput {
    fn from_simple(input: String) -> Option<Self> {
        input.trim().parse().ok().map(|elapsed_ms| Self {
            elapsed_ms,
            laps: Vec::new(),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StopwatchTool;

impl Tool for StopwatchTool {
    fn name(&self) -> &str {
        "stopwatch"
    }

    fn call(&self, input: String) -> ExecutionResult {
        StopwatchInput::parse(input)
            .and_then(|config| {
                if config.laps.last().is_some_and(|&last| last > config.elapsed_ms) {
                    return Err(invalid_input("Lap marks cannot exceed the elapsed time"));
                }
                let laps = lap_splits(&config.laps).map_err(invalid_input)?;
                Ok(serde_json::json!({
                    "elapsed": format_stopwatch(config.elapsed_ms),
                    "laps": laps,
                }))
            })
            .into()
    }
}

/// Countdown length, either as clock fields or a humantime string such as
/// `"1h 30m"`. Missing clock fields are zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum CountdownInput {
    Duration {
        duration: String,
    },
    Fields {
        #[serde(default)]
        hours: u64,
        #[serde(default)]
        minutes: u64,
        #[serde(default)]
        seconds: u64,
    },
}

impl ToolConfig for CountdownInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(CountdownInput::Duration { duration: input })
    }
}

impl CountdownInput {
    /// Total length, validated against the display limits.
    pub fn total(&self) -> Result<Duration, String> {
        let secs = match self {
            CountdownInput::Duration { duration } => humantime::parse_duration(duration.trim())
                .map_err(|e| format!("Invalid duration \"{}\": {}", duration.trim(), e))?
                .as_secs(),
            CountdownInput::Fields {
                hours,
                minutes,
                seconds,
            } => {
                if *hours > 99 || *minutes > 59 || *seconds > 59 {
                    return Err(
                        "Hours must be 0-99, minutes and seconds 0-59".to_string()
                    );
                }
                hours * 3600 + minutes * 60 + seconds
            }
        };
        if secs == 0 {
            return Err("Please set a time greater than zero".to_string());
        }
        if secs > MAX_COUNTDOWN_SECS {
            return Err(format!(
                "Countdown cannot exceed {}",
                format_clock(MAX_COUNTDOWN_SECS)
            ));
        }
        Ok(Duration::from_secs(secs))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub remaining: String,
    pub total_seconds: u64,
    pub ends_at: String,
}

/// Countdown starting at `now`.
pub fn countdown(length: Duration, now: DateTime<Utc>) -> Result<Countdown, String> {
    let delta = chrono::Duration::from_std(length).map_err(|e| e.to_string())?;
    let ends_at = now
        .checked_add_signed(delta)
        .ok_or_else(|| "Countdown end is out of range".to_string())?;
    Ok(Countdown {
        remaining: format_clock(length.as_secs()),
        total_seconds: length.as_secs(),
        ends_at: ends_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CountdownTimerTool;

impl Tool for CountdownTimerTool {
    fn name(&self) -> &str {
        "countdown-timer"
    }

    fn call(&self, input: String) -> ExecutionResult {
        CountdownInput::parse(input)
            .and_then(|config| {
                let length = config.total().map_err(invalid_input)?;
                let result = countdown(length, Utc::now()).map_err(invalid_input)?;
                serde_json::to_value(result).map_err(|e| invalid_input(e.to_string()))
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(0, "00:00:00.00")]
    #[case(1_239, "00:00:01.23")]
    #[case(61_005, "00:01:01.00")]
    #[case(3_723_990, "01:02:03.99")]
    #[case(360_000_000, "100:00:00.00")]
    fn stopwatch_format(#[case] ms: u64, #[case] expected: &str) {
        assert_eq!(format_stopwatch(ms), expected);
    }

    #[test]
    fn laps_are_split() {
        let laps = lap_splits(&[1_500, 4_000, 4_000]).unwrap();
        assert_eq!(laps[1].split, "00:00:02.50");
        assert_eq!(laps[1].total, "00:00:04.00");
        assert_eq!(laps[2].split, "00:00:00.00");
        assert!(lap_splits(&[2_000, 1_000]).is_err());
    }

    #[test]
    fn stopwatch_tool() {
        let out = StopwatchTool
            .call(r#"{"elapsed_ms": 5000, "laps": [1000, 3000]}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["elapsed"], "00:00:05.00");
        assert_eq!(out["laps"][1]["split"], "00:00:02.00");
        assert!(StopwatchTool.call(r#"{"elapsed_ms": 10, "laps": [20]}"#.into()).is_failure());
    }

    #[rstest]
    #[case(r#"{"hours": 1, "minutes": 30}"#, 5_400)]
    #[case(r#"{"seconds": 30}"#, 30)]
    #[case(r#"{"duration": "1h 30m"}"#, 5_400)]
    #[case("90s", 90)]
    fn countdown_length(#[case] input: &str, #[case] secs: u64) {
        let config = CountdownInput::parse(input.into()).unwrap();
        assert_eq!(config.total().unwrap(), Duration::from_secs(secs));
    }

    #[rstest]
    #[case(r#"{"minutes": 0}"#)]
    #[case(r#"{}"#)]
    #[case(r#"{"duration": 90}"#)]
    #[case(r#"{"minutes": 5, "hourz": 1}"#)]
    #[case(r#"{"minutes": 60}"#)]
    #[case("100h")]
    #[case("soon")]
    fn countdown_rejects(#[case] input: &str) {
        assert!(CountdownTimerTool.call(input.into()).is_failure());
    }

    #[test]
    fn countdown_end_time() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 23, 30, 0).unwrap();
        let result = countdown(Duration::from_secs(5_400), now).unwrap();
        assert_eq!(result.remaining, "01:30:00");
        assert_eq!(result.ends_at, "2025-01-02T01:00:00Z");
    }
}
