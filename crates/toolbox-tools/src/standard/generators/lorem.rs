//! Lorem ipsum placeholder text.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

/// Upper bound on requested units
pub const MAX_LOREM_COUNT: usize = 1000;

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepturi", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoremUnit {
    #[default]
    Paragraphs,
    Sentences,
    Words,
}

fn default_count() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoremConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub unit: LoremUnit,
}

impl ToolConfig for LoremConfig {
    fn from_simple(input: String) -> Option<Self> {
        let trimmed = input.trim();
        let count = if trimmed.is_empty() {
            default_count()
        } else {
            trimmed.parse().ok()?
        };
        Some(Self {
            count,
            unit: LoremUnit::default(),
        })
    }
}

fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LOREM_WORDS.choose(rng).copied().unwrap_or("lorem")
}

fn capitalize_and_close(words: Vec<&str>) -> String {
    let text = words.join(" ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(8..=17);
    capitalize_and_close((0..len).map(|_| random_word(rng)).collect())
}

fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let sentences = rng.random_range(3..=7);
    (0..sentences)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate `count` units of placeholder text.
pub fn generate_lorem<R: Rng + ?Sized>(rng: &mut R, count: usize, unit: LoremUnit) -> String {
    match unit {
        LoremUnit::Paragraphs => (0..count)
            .map(|_| paragraph(rng))
            .collect::<Vec<_>>()
            .join("\n\n"),
        LoremUnit::Sentences => (0..count)
            .map(|_| sentence(rng))
            .collect::<Vec<_>>()
            .join(" "),
        LoremUnit::Words => capitalize_and_close((0..count).map(|_| random_word(rng)).collect()),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoremIpsumTool;

impl Tool for LoremIpsumTool {
    fn name(&self) -> &str {
        "lorem-ipsum-generator"
    }

    fn call(&self, input: String) -> ExecutionResult {
        LoremConfig::parse(input)
            .and_then(|config| {
                if config.count == 0 || config.count > MAX_LOREM_COUNT {
                    return Err(invalid_input(format!(
                        "Count must be between 1 and {}",
                        MAX_LOREM_COUNT
                    )));
                }
                let text = generate_lorem(&mut rand::rng(), config.count, config.unit);
                Ok(serde_json::json!({ "count": config.count, "result": text }))
            })
            .into()
    }
}
