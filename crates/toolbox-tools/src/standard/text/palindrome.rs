//! Palindrome checking.

use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

const PUNCTUATION: &str = "~`!@#$%^&*(){}[];:\"'<,.>?/\\|_+=-";

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PalindromeConfig {
    pub text: String,
    #[serde(default = "default_true")]
    pub ignore_case: bool,
    #[serde(default = "default_true")]
    pub ignore_punctuation: bool,
}

impl ToolConfig for PalindromeConfig {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self {
            text: input,
            ignore_case: true,
            ignore_punctuation: true,
        })
    }
}

/// Normalize text the way the checker compares it.
pub fn normalize(text: &str, ignore_case: bool, ignore_punctuation: bool) -> String {
    let text = if ignore_case {
        text.to_lowercase()
    } else {
        text.to_string()
    };
    if ignore_punctuation {
        text.chars()
            .filter(|c| !c.is_whitespace() && !PUNCTUATION.contains(*c))
            .collect()
    } else {
        text
    }
}

/// Whether `text` reads the same both ways. Text that normalizes to
/// nothing is not a palindrome.
pub fn is_palindrome(text: &str, ignore_case: bool, ignore_punctuation: bool) -> bool {
    let processed: Vec<char> = normalize(text, ignore_case, ignore_punctuation)
        .chars()
        .collect();
    !processed.is_empty() && processed.iter().eq(processed.iter().rev())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PalindromeCheckerTool;

impl Tool for PalindromeCheckerTool {
    fn name(&self) -> &str {
        "palindrome-checker"
    }

    fn call(&self, input: String) -> ExecutionResult {
        PalindromeConfig::parse(input)
            .and_then(|config| {
                if config.text.trim().is_empty() {
                    return Err(invalid_input("Please enter some text to check"));
                }
                Ok(serde_json::json!({
                    "text": config.text,
                    "normalized": normalize(&config.text, config.ignore_case, config.ignore_punctuation),
                    "is_palindrome": is_palindrome(&config.text, config.ignore_case, config.ignore_punctuation),
                }))
            })
            .into()
    }
}
