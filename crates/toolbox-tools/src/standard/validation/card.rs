//! Credit card numbers: Luhn checksum and issuer detection.

use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

pub const MIN_CARD_DIGITS: usize = 13;
pub const MAX_CARD_DIGITS: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardBrand {
    Visa,
    Mastercard,
    #[serde(rename = "American Express")]
    AmericanExpress,
    Discover,
}

impl CardBrand {
    /// Issuer from the leading digits, if recognized.
    pub fn detect(digits: &str) -> Option<Self> {
        let prefix = |n: usize| digits.get(..n).and_then(|p| p.parse::<u32>().ok());
        if digits.starts_with('4') {
            Some(CardBrand::Visa)
        } else if matches!(prefix(2), Some(34 | 37)) {
            Some(CardBrand::AmericanExpress)
        } else if matches!(prefix(2), Some(51..=55)) || matches!(prefix(4), Some(2221..=2720)) {
            Some(CardBrand::Mastercard)
        } else if prefix(4) == Some(6011)
            || prefix(2) == Some(65)
            || matches!(prefix(3), Some(644..=649))
        {
            Some(CardBrand::Discover)
        } else {
            None
        }
    }
}

/// Strip spaces and dashes; any other non-digit is an error.
pub fn normalize_card_number(input: &str) -> Result<String, String> {
    let mut digits = String::with_capacity(input.len());
    for c in input.trim().chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' => {}
            _ => return Err("Card number may only contain digits, spaces and dashes".to_string()),
        }
    }
    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        return Err(format!(
            "Card number must have between {} and {} digits",
            MIN_CARD_DIGITS, MAX_CARD_DIGITS
        ));
    }
    Ok(digits)
}

/// Luhn checksum over ASCII digits: double every second digit from the
/// right, subtracting 9 from results above 9.
pub fn luhn_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return false;
        }
        let mut d = u32::from(b - b'0');
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    !digits.is_empty() && sum % 10 == 0
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardInput {
    pub number: String,
}

impl ToolConfig for CardInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self { number: input })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardValidatorTool;

impl Tool for CreditCardValidatorTool {
    fn name(&self) -> &str {
        "credit-card-validator"
    }

    fn call(&self, input: String) -> ExecutionResult {
        CardInput::parse(input)
            .and_then(|config| {
                let digits = normalize_card_number(&config.number).map_err(invalid_input)?;
                Ok(serde_json::json!({
                    "valid": luhn_valid(&digits),
                    "brand": CardBrand::detect(&digits),
                    "digits": digits.len(),
                }))
            })
            .into()
    }
}
