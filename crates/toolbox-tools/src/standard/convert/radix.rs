//! Decimal and binary conversion.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

/// Largest integer a double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Binary digits needed for [`MAX_SAFE_INTEGER`].
pub const MAX_BINARY_DIGITS: usize = 53;

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid regex"));
static BINARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[01]+$").expect("valid regex"));

#[derive(Debug, Clone, Deserialize)]
pub struct RadixInput {
    pub value: String,
}

impl ToolConfig for RadixInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self { value: input })
    }
}

/// Render a non-negative decimal string in base 2.
pub fn decimal_to_binary(input: &str) -> Result<String, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Please enter a decimal number".to_string());
    }
    if !DECIMAL.is_match(input) {
        return Err("Please enter a valid non-negative integer".to_string());
    }
    let value: u64 = input
        .parse()
        .ok()
        .filter(|n| *n <= MAX_SAFE_INTEGER)
        .ok_or_else(|| format!("Number is too large (max {})", MAX_SAFE_INTEGER))?;
    Ok(format!("{:b}", value))
}

/// Parse a binary string into its decimal value.
pub fn binary_to_decimal(input: &str) -> Result<u64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Please enter a binary number".to_string());
    }
    if !BINARY.is_match(input) {
        return Err("Binary numbers may only contain 0 and 1".to_string());
    }
    if input.len() > MAX_BINARY_DIGITS {
        return Err(format!(
            "Binary number is too long (max {} digits)",
            MAX_BINARY_DIGITS
        ));
    }
    u64::from_str_radix(input, 2).map_err(|e| e.to_string())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalToBinaryTool;

impl Tool for DecimalToBinaryTool {
    fn name(&self) -> &str {
        "decimal-to-binary-converter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        RadixInput::parse(input)
            .and_then(|config| {
                decimal_to_binary(&config.value)
                    .map(|binary| serde_json::json!({ "binary": binary }))
                    .map_err(invalid_input)
            })
            .into()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryToDecimalTool;

impl Tool for BinaryToDecimalTool {
    fn name(&self) -> &str {
        "binary-to-decimal-converter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        RadixInput::parse(input)
            .and_then(|config| {
                binary_to_decimal(&config.value)
                    .map(|decimal| serde_json::json!({ "decimal": decimal }))
                    .map_err(invalid_input)
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", "0")]
    #[case("10", "1010")]
    #[case(" 255 ", "11111111")]
    #[case("9007199254740991", "11111111111111111111111111111111111111111111111111111")]
    fn decimal_examples(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decimal_to_binary(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("-5")]
    #[case("1.5")]
    #[case("9007199254740992")]
    #[case("99999999999999999999999")]
    fn decimal_rejections(#[case] input: &str) {
        assert!(decimal_to_binary(input).is_err());
    }

    #[test]
    fn binary_rejections() {
        assert!(binary_to_decimal("102").is_err());
        assert!(binary_to_decimal(&"1".repeat(54)).is_err());
        assert_eq!(binary_to_decimal(&"1".repeat(53)).unwrap(), MAX_SAFE_INTEGER);
    }

    proptest! {
        #[test]
        fn round_trips_every_safe_integer(n in 0..=MAX_SAFE_INTEGER) {
            let binary = decimal_to_binary(&n.to_string()).unwrap();
            prop_assert_eq!(binary_to_decimal(&binary).unwrap(), n);
        }
    }

    #[test]
    fn tools_emit_json() {
        let out = DecimalToBinaryTool.call("5".into()).output_json().unwrap();
        assert_eq!(out["binary"], "101");
        let out = BinaryToDecimalTool
            .call(r#"{"value":"101"}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["decimal"], 5);
    }
}
