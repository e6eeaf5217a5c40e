//! English number words in both directions.

use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

/// Largest magnitude spelled out (just under a quadrillion).
pub const MAX_WORDS_MAGNITUDE: i64 = 999_999_999_999_999;

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

fn chunk_to_words(mut n: u64) -> String {
    let mut parts: Vec<String> = Vec::new();
    if n >= 100 {
        parts.push(format!("{} hundred", ONES[(n / 100) as usize]));
        n %= 100;
    }
    match n {
        0 => {}
        1..=9 => parts.push(ONES[n as usize].to_string()),
        10..=19 => parts.push(TEENS[(n - 10) as usize].to_string()),
        _ if n % 10 == 0 => parts.push(TENS[(n / 10) as usize].to_string()),
        _ => parts.push(format!("{}-{}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])),
    }
    parts.join(" ")
}

/// Spell out an integer in lowercase English.
pub fn number_to_words(n: i64) -> Result<String, String> {
    if n.unsigned_abs() > MAX_WORDS_MAGNITUDE as u64 {
        return Err("Number is too large to convert".to_string());
    }
    if n == 0 {
        return Ok("zero".to_string());
    }
    if n < 0 {
        return number_to_words(-n).map(|words| format!("minus {}", words));
    }

    let mut remaining = n as u64;
    let mut groups: Vec<String> = Vec::new();
    for scale in SCALES {
        let chunk = remaining % 1000;
        if chunk != 0 {
            let words = chunk_to_words(chunk);
            groups.push(if scale.is_empty() {
                words
            } else {
                format!("{} {}", words, scale)
            });
        }
        remaining /= 1000;
        if remaining == 0 {
            break;
        }
    }
    groups.reverse();
    Ok(groups.join(" "))
}

fn word_value(word: &str) -> Option<i64> {
    if let Some(i) = ONES.iter().skip(1).position(|w| *w == word) {
        return Some(i as i64 + 1);
    }
    if let Some(i) = TEENS.iter().position(|w| *w == word) {
        return Some(i as i64 + 10);
    }
    if let Some(i) = TENS.iter().skip(2).position(|w| *w == word) {
        return Some((i as i64 + 2) * 10);
    }
    (word == "zero").then_some(0)
}

fn scale_value(word: &str) -> Option<i64> {
    SCALES
        .iter()
        .skip(1)
        .position(|w| *w == word)
        .map(|i| 1000_i64.pow(i as u32 + 1))
}

/// Parse English number words into an integer.
pub fn words_to_number(text: &str) -> Result<i64, String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    let mut words: Vec<&str> = normalized.split_whitespace().collect();
    if words.is_empty() {
        return Err("No valid words found".to_string());
    }

    let negative = matches!(words[0], "minus" | "negative");
    if negative {
        words.remove(0);
    }

    let overflow = || "Number is too large to convert".to_string();
    let mut total: i64 = 0;
    let mut current: i64 = 0;
    let mut saw_zero = false;
    for word in &words {
        if let Some(value) = word_value(word) {
            saw_zero |= value == 0;
            current = current.checked_add(value).ok_or_else(overflow)?;
        } else if *word == "hundred" {
            current = current.checked_mul(100).ok_or_else(overflow)?;
        } else if let Some(scale) = scale_value(word) {
            let group = current.checked_mul(scale).ok_or_else(overflow)?;
            total = total.checked_add(group).ok_or_else(overflow)?;
            current = 0;
        } else if *word != "and" {
            return Err(format!("Unknown word: \"{}\"", word));
        }
    }
    total = total.checked_add(current).ok_or_else(overflow)?;

    if total == 0 && !saw_zero {
        return Err("Could not parse number structure".to_string());
    }
    Ok(if negative { -total } else { total })
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumberInput {
    pub value: String,
}

impl ToolConfig for NumberInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self { value: input })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NumberToWordsTool;

impl Tool for NumberToWordsTool {
    fn name(&self) -> &str {
        "number-to-words-converter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        NumberInput::parse(input)
            .and_then(|config| {
                let n: i64 = config
                    .value
                    .trim()
                    .parse()
                    .map_err(|_| invalid_input("Please enter a valid integer"))?;
                let words = number_to_words(n).map_err(invalid_input)?;
                Ok(serde_json::json!({ "number": n, "words": capitalize(&words) }))
            })
            .into()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WordsToNumberTool;

impl Tool for WordsToNumberTool {
    fn name(&self) -> &str {
        "words-to-number-converter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        NumberInput::parse(input)
            .and_then(|config| {
                words_to_number(&config.value)
                    .map(|n| serde_json::json!({ "number": n }))
                    .map_err(invalid_input)
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "zero")]
    #[case(7, "seven")]
    #[case(15, "fifteen")]
    #[case(40, "forty")]
    #[case(23, "twenty-three")]
    #[case(105, "one hundred five")]
    #[case(1_000, "one thousand")]
    #[case(1_234_567, "one million two hundred thirty-four thousand five hundred sixty-seven")]
    #[case(-42, "minus forty-two")]
    #[case(2_000_000_000_001, "two trillion one")]
    fn spells_numbers(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(number_to_words(n).unwrap(), expected);
    }

    #[test]
    fn magnitude_limit() {
        assert!(number_to_words(MAX_WORDS_MAGNITUDE).is_ok());
        assert!(number_to_words(MAX_WORDS_MAGNITUDE + 1).is_err());
        assert!(number_to_words(i64::MIN).is_err());
    }

    #[rstest]
    #[case("zero", 0)]
    #[case("Twenty-Three", 23)]
    #[case("one hundred and five", 105)]
    #[case("negative two thousand", -2000)]
    #[case("one million two hundred thirty-four thousand five hundred sixty-seven", 1_234_567)]
    fn parses_words(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(words_to_number(text).unwrap(), expected);
    }

    #[test]
    fn reports_unknown_words() {
        assert_eq!(
            words_to_number("twenty bazillion").unwrap_err(),
            "Unknown word: \"bazillion\""
        );
        assert!(words_to_number("and").is_err());
        assert!(words_to_number("123").is_err());
    }

    #[test]
    fn round_trips_through_words() {
        for n in [0, 9, 19, 99, 101, 999_999, -12_345, 999_999_999_999_999] {
            let words = number_to_words(n).unwrap();
            assert_eq!(words_to_number(&words).unwrap(), n, "{words}");
        }
    }

    #[test]
    fn tool_capitalizes_output() {
        let out = NumberToWordsTool.call("123".into()).output_json().unwrap();
        assert_eq!(out["words"], "One hundred twenty-three");
        assert!(NumberToWordsTool.call("12a".into()).is_failure());
    }
}
