//! Upper, lower, title and sentence case.

use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::ToolConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Upper,
    Lower,
    Title,
    Sentence,
}

impl CaseMode {
    fn as_str(&self) -> &'static str {
        match self {
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
            CaseMode::Title => "title",
            CaseMode::Sentence => "sentence",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseConfig {
    pub text: String,
    #[serde(default)]
    pub mode: CaseMode,
}

impl ToolConfig for CaseConfig {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self {
            text: input,
            mode: CaseMode::default(),
        })
    }
}

/// Apply a case mode to text.
pub fn convert_case(text: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => text.to_uppercase(),
        CaseMode::Lower => text.to_lowercase(),
        CaseMode::Title => title_case(text),
        CaseMode::Sentence => sentence_case(text),
    }
}

/// Lowercase, then capitalize the first letter of every word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.to_lowercase().chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !is_word;
    }
    out
}

/// Lowercase, then capitalize a word character that opens a line or follows
/// a period (with any whitespace between). Indented lines stay lowercase.
fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut line_start = true;
    let mut after_period = false;
    for c in text.to_lowercase().chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && (line_start || after_period) {
            out.extend(c.to_uppercase());
            after_period = false;
        } else {
            if c == '.' {
                after_period = true;
            } else if !c.is_whitespace() {
                after_period = false;
            }
            out.push(c);
        }
        line_start = c == '\n';
    }
    out
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CaseConverterTool;

impl Tool for CaseConverterTool {
    fn name(&self) -> &str {
        "case-converter"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "type": "object",
            "properties": {
                "text": {"type": "string"},
                "mode": {"type": "string", "enum": ["upper", "lower", "title", "sentence"]}
            },
            "required": ["text"]
        }))
    }

    fn call(&self, input: String) -> ExecutionResult {
        CaseConfig::parse(input)
            .map(|config| {
                serde_json::json!({
                    "mode": config.mode.as_str(),
                    "result": convert_case(&config.text, config.mode),
                })
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CaseMode::Upper, "hello World", "HELLO WORLD")]
    #[case(CaseMode::Lower, "Hello WORLD", "hello world")]
    #[case(CaseMode::Title, "the QUICK brown-fox", "The Quick Brown-Fox")]
    #[case(CaseMode::Sentence, "HELLO THERE. how are you?", "Hello there. How are you?")]
    #[case(CaseMode::Sentence, "first line\nsecond line", "First line\nSecond line")]
    #[case(CaseMode::Sentence, "  indented start", "  indented start")]
    #[case(CaseMode::Sentence, "done.\n  next", "Done.\n  Next")]
    fn converts(#[case] mode: CaseMode, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_case(input, mode), expected);
    }

    #[test]
    fn sentence_case_only_capitalizes_after_period() {
        assert_eq!(
            convert_case("WHAT? NO! ok. fine", CaseMode::Sentence),
            "What? no! ok. Fine"
        );
    }

    #[test]
    fn tool_reads_mode() {
        let out = CaseConverterTool
            .call(r#"{"text":"abc def","mode":"title"}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["result"], "Abc Def");
        assert_eq!(out["mode"], "title");

        // not an exact options object, so the whole input is the text
        let out = CaseConverterTool
            .call(r#"{"text":"x","mode":"snake"}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["result"], r#"{"TEXT":"X","MODE":"SNAKE"}"#);
        assert_eq!(out["mode"], "upper");
    }
}
