//! Input parsing shared by the standard tools.
//!
//! Tools take either a JSON object with their options or plain text that
//! fills the primary field. [`ToolConfig::parse`] implements that rule once.

use serde::de::DeserializeOwned;
use toolbox_core::FailureReason;

pub use toolbox_core::tool::{ExecutionResult, Tool, ToolCall};

/// Options object accepted by a tool.
pub trait ToolConfig: DeserializeOwned + Sized {
    /// Whether a JSON object that is not a valid config should be handed to
    /// [`ToolConfig::from_simple`] as raw text (tools whose payload is JSON).
    const RAW_JSON_INPUT: bool = false;

    /// Build the config from plain text, `None` if the tool needs an object.
    fn from_simple(input: String) -> Option<Self>;

    /// Parse tool input into the config.
    fn parse(input: String) -> Result<Self, FailureReason> {
        match serde_json::from_str::<Self>(&input) {
            Ok(config) => Ok(config),
            Err(e) if looks_like_object(&input) && !Self::RAW_JSON_INPUT => {
                Err(invalid_input(format!("Invalid JSON config: {}", e)))
            }
            Err(_) => Self::from_simple(input)
                .ok_or_else(|| invalid_input("This tool expects a JSON object with its options")),
        }
    }
}

fn looks_like_object(input: &str) -> bool {
    input.trim_start().starts_with('{')
}

/// Build an [`FailureReason::InvalidInput`].
pub fn invalid_input(message: impl Into<String>) -> FailureReason {
    FailureReason::InvalidInput {
        message: message.into(),
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    // normalize -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format with at most `places` decimals, dropping trailing zeros.
pub fn format_trimmed(value: f64, places: usize) -> String {
    let formatted = format!("{:.*}", places, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct EchoConfig {
        text: String,
        #[serde(default)]
        loud: bool,
    }

    impl ToolConfig for EchoConfig {
        fn from_simple(input: String) -> Option<Self> {
            Some(Self {
                text: input,
                loud: false,
            })
        }
    }

    #[derive(Debug, Deserialize)]
    struct ObjectOnly {
        #[allow(dead_code)]
        n: u32,
    }

    impl ToolConfig for ObjectOnly {
        fn from_simple(_: String) -> Option<Self> {
            None
        }
    }

    #[test]
    fn parses_object_or_plain_text() {
        let config = EchoConfig::parse(r#"{"text":"hi","loud":true}"#.into()).unwrap();
        assert_eq!(config.text, "hi");
        assert!(config.loud);

        let config = EchoConfig::parse("just text".into()).unwrap();
        assert_eq!(config.text, "just text");
        assert!(!config.loud);
    }

    #[test]
    fn malformed_object_is_rejected() {
        let err = EchoConfig::parse(r#"{"loud": true}"#.into()).unwrap_err();
        assert!(err.message().contains("Invalid JSON config"));
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct RawText {
        text: String,
    }

    impl ToolConfig for RawText {
        const RAW_JSON_INPUT: bool = true;

        fn from_simple(input: String) -> Option<Self> {
            Some(Self { text: input })
        }
    }

    #[test]
    fn raw_config_keeps_json_looking_text() {
        for input in [r#"{"user":"ada","id":1}"#, "{hello}", r#"{"text":"a","x":1}"#] {
            assert_eq!(RawText::parse(input.into()).unwrap().text, input);
        }
        assert_eq!(RawText::parse(r#"{"text":"abc"}"#.into()).unwrap().text, "abc");
    }

    #[test]
    fn object_only_config_rejects_text() {
        let err = ObjectOnly::parse("12".into()).unwrap_err();
        assert!(matches!(err, FailureReason::InvalidInput { .. }));
    }

    #[test]
    fn number_formatting() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-0.0001, 2), 0.0);
        assert_eq!(format_trimmed(32.0, 2), "32");
        assert_eq!(format_trimmed(273.15, 2), "273.15");
        assert_eq!(format_trimmed(0.5, 6), "0.5");
        assert_eq!(format_trimmed(-0.0000001, 2), "0");
    }
}
