//! Word and character counting.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::ToolConfig;

static SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("valid regex"));
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Plain text input shared by the text utilities
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextInput {
    pub text: String,
}

impl ToolConfig for TextInput {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self { text: input })
    }
}

/// Counts reported by the word counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

/// Compute word, character, sentence and paragraph counts.
pub fn text_stats(text: &str) -> TextStats {
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

    if text.trim().is_empty() {
        return TextStats {
            words: 0,
            characters,
            characters_no_spaces,
            sentences: 0,
            paragraphs: 0,
        };
    }

    TextStats {
        words: text.split_whitespace().count(),
        characters,
        characters_no_spaces,
        sentences: SENTENCE.find_iter(text).count(),
        paragraphs: PARAGRAPH_BREAK
            .split(text)
            .filter(|p| !p.trim().is_empty())
            .count(),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WordCounterTool;

impl Tool for WordCounterTool {
    fn name(&self) -> &str {
        "word-counter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        TextInput::parse(input)
            .map(|config| serde_json::json!(text_stats(&config.text)))
            .into()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CharacterCounterTool;

impl Tool for CharacterCounterTool {
    fn name(&self) -> &str {
        "character-counter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        TextInput::parse(input)
            .map(|config| {
                let stats = text_stats(&config.text);
                serde_json::json!({
                    "characters": stats.characters,
                    "characters_no_spaces": stats.characters_no_spaces,
                })
            })
            .into()
    }
}
