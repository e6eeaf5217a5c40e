//! Base64 text encoding.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Base64Input {
    pub text: String,
}

impl ToolConfig for Base64Input {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self { text: input })
    }
}

/// Encode UTF-8 text as standard padded base64.
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode base64 into UTF-8 text. Whitespace inside the payload is ignored.
pub fn decode_base64(encoded: &str) -> Result<String, String> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| format!("Invalid Base64 string: {}", e))?;
    String::from_utf8(bytes).map_err(|_| "Decoded data is not valid UTF-8 text".to_string())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Base64EncoderTool;

impl Tool for Base64EncoderTool {
    fn name(&self) -> &str {
        "base64-encoder"
    }

    fn call(&self, input: String) -> ExecutionResult {
        Base64Input::parse(input)
            .map(|config| serde_json::json!({ "result": encode_base64(&config.text) }))
            .into()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Base64DecoderTool;

impl Tool for Base64DecoderTool {
    fn name(&self) -> &str {
        "base64-decoder"
    }

    fn call(&self, input: String) -> ExecutionResult {
        Base64Input::parse(input)
            .and_then(|config| {
                decode_base64(&config.text)
                    .map(|result| serde_json::json!({ "result": result }))
                    .map_err(invalid_input)
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_eq!(encode_base64("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(encode_base64("héllo ✓"), "aMOpbGxvIOKckw==");
        assert_eq!(decode_base64("SGVsbG8sIFdv\ncmxkIQ==").unwrap(), "Hello, World!");
    }

    #[test]
    fn blank_input_is_empty_output() {
        assert_eq!(encode_base64(""), "");
        assert_eq!(decode_base64("   ").unwrap(), "");
    }

    #[test]
    fn rejects_invalid_payloads() {
        assert!(decode_base64("not base64!").is_err());
        // 0xFF 0xFE is not UTF-8
        assert!(decode_base64("//4=").is_err());
        assert!(Base64DecoderTool.call("%%%".into()).is_failure());
    }

    #[test]
    fn json_documents_are_encoded_as_text() {
        let doc = r#"{"user":"ada","id":1}"#;
        let out = Base64EncoderTool.call(doc.into()).output_json().unwrap();
        assert_eq!(out["result"], encode_base64(doc));

        let out = Base64EncoderTool.call("{hello}".into()).output_json().unwrap();
        assert_eq!(out["result"], "e2hlbGxvfQ==");

        // an exact options object is still read as options
        let out = Base64EncoderTool.call(r#"{"text":"abc"}"#.into()).output_json().unwrap();
        assert_eq!(out["result"], "YWJj");
    }

    fn tool_round_trip(s: &str) -> Option<String> {
        let encoded = Base64EncoderTool.call(s.to_string()).output_json()?;
        let encoded = encoded["result"].as_str()?.to_string();
        let decoded = Base64DecoderTool.call(encoded).output_json()?;
        decoded["result"].as_str().map(str::to_string)
    }

    proptest! {
        #[test]
        fn round_trips_any_text(s in any::<String>()) {
            prop_assert_eq!(decode_base64(&encode_base64(&s)).unwrap(), s);
        }

        #[test]
        fn tools_round_trip_raw_text(s in prop_oneof!["\\PC{0,200}", "\\{.*"]) {
            prop_assume!(serde_json::from_str::<Base64Input>(&s).is_err());
            prop_assert_eq!(tool_round_trip(&s), Some(s));
        }
    }
}
