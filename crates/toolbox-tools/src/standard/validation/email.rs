//! Email address syntax check.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("valid regex")
});

/// Whether the trimmed address has valid syntax. The domain needs at
/// least one dot.
pub fn is_valid_email(address: &str) -> bool {
    EMAIL.is_match(address.trim())
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailInput {
    pub email: String,
}

impl ToolConfig for EmailInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self { email: input })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorTool;

impl Tool for EmailValidatorTool {
    fn name(&self) -> &str {
        "email-validator"
    }

    fn call(&self, input: String) -> ExecutionResult {
        EmailInput::parse(input)
            .and_then(|config| {
                let email = config.email.trim();
                if email.is_empty() {
                    return Err(invalid_input("Please enter an email address"));
                }
                Ok(serde_json::json!({ "email": email, "valid": is_valid_email(email) }))
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("  first.last+tag@sub.example.co.uk ", true)]
    #[case("o'brien@example.ie", true)]
    #[case("user@localhost", false)]
    #[case("user@-example.com", false)]
    #[case("user@example..com", false)]
    #[case("user.example.com", false)]
    #[case("user @example.com", false)]
    #[case("@example.com", false)]
    fn syntax(#[case] address: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(address), valid, "{address}");
    }

    #[test]
    fn tool_output() {
        let out = EmailValidatorTool.call("a@b.io".into()).output_json().unwrap();
        assert_eq!(out["valid"], true);
        assert!(EmailValidatorTool.call(" ".into()).is_failure());
    }
}
