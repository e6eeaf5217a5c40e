//! Random password generation.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 128;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

fn default_length() -> usize {
    12
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordConfig {
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_true")]
    pub uppercase: bool,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_true")]
    pub numbers: bool,
    #[serde(default)]
    pub symbols: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

impl ToolConfig for PasswordConfig {
    fn from_simple(input: String) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Some(Self::default());
        }
        Some(Self {
            length: trimmed.parse().ok()?,
            ..Self::default()
        })
    }
}

impl PasswordConfig {
    fn charset(&self) -> Vec<char> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.numbers, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, pool)| pool.chars())
        .collect()
    }
}

/// Draw a password from the pools enabled in `config`.
pub fn generate_password<R: Rng + ?Sized>(
    rng: &mut R,
    config: &PasswordConfig,
) -> Result<String, String> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&config.length) {
        return Err(format!(
            "Password length must be between {} and {}",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        ));
    }
    let charset = config.charset();
    if charset.is_empty() {
        return Err("Please select at least one character type".to_string());
    }
    Ok((0..config.length)
        .filter_map(|_| charset.choose(rng).copied())
        .collect())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGeneratorTool;

impl Tool for PasswordGeneratorTool {
    fn name(&self) -> &str {
        "random-password-generator"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "type": "object",
            "properties": {
                "length": { "type": "integer", "minimum": MIN_PASSWORD_LENGTH, "maximum": MAX_PASSWORD_LENGTH },
                "uppercase": { "type": "boolean" },
                "lowercase": { "type": "boolean" },
                "numbers": { "type": "boolean" },
                "symbols": { "type": "boolean" }
            }
        }))
    }

    fn call(&self, input: String) -> ExecutionResult {
        PasswordConfig::parse(input)
            .and_then(|config| {
                generate_password(&mut rand::rng(), &config)
                    .map(|password| {
                        serde_json::json!({ "length": config.length, "password": password })
                    })
                    .map_err(invalid_input)
            })
            .into()
    }
}
