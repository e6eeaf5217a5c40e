//! Line-oriented tools: repeat, de-duplicate and sort.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

/// Maximum repetitions accepted by the text repeater
pub const MAX_REPEAT: usize = 1000;

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Repeat

#[derive(Debug, Clone, Deserialize)]
pub struct RepeatConfig {
    pub text: String,
    pub count: usize,
    #[serde(default)]
    pub separator: Option<String>,
}

impl ToolConfig for RepeatConfig {
    fn from_simple(_: String) -> Option<Self> {
        None
    }
}

/// Repeat `text` `count` times joined by `separator`.
///
/// The two-character sequence `\n` in the separator is a newline; no
/// separator means newline.
pub fn repeat_text(text: &str, count: usize, separator: Option<&str>) -> Result<String, String> {
    if text.is_empty() {
        return Err("Please enter text to repeat".to_string());
    }
    if !(1..=MAX_REPEAT).contains(&count) {
        return Err(format!("Count must be between 1 and {}", MAX_REPEAT));
    }
    let separator = separator.map_or_else(|| "\n".to_string(), |s| s.replace("\\n", "\n"));
    Ok(vec![text; count].join(separator.as_str()))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextRepeaterTool;

impl Tool for TextRepeaterTool {
    fn name(&self) -> &str {
        "text-repeater"
    }

    fn call(&self, input: String) -> ExecutionResult {
        RepeatConfig::parse(input)
            .and_then(|config| {
                repeat_text(&config.text, config.count, config.separator.as_deref())
                    .map(|result| serde_json::json!({ "count": config.count, "result": result }))
                    .map_err(invalid_input)
            })
            .into()
    }
}

// ---------------------------------------------------------------------------
// De-duplicate

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DedupConfig {
    pub text: String,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default = "default_true")]
    pub trim: bool,
}

impl ToolConfig for DedupConfig {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self {
            text: input,
            case_sensitive: false,
            trim: true,
        })
    }
}

/// Keep the first occurrence of each line. Case and surrounding whitespace
/// only affect comparison; kept lines are returned verbatim.
pub fn remove_duplicate_lines(text: &str, case_sensitive: bool, trim: bool) -> (String, usize) {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut removed = 0;
    for line in text.lines() {
        let mut key = if trim { line.trim() } else { line }.to_string();
        if !case_sensitive {
            key = key.to_lowercase();
        }
        if seen.insert(key) {
            kept.push(line);
        } else {
            removed += 1;
        }
    }
    (kept.join("\n"), removed)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveDuplicateLinesTool;

impl Tool for RemoveDuplicateLinesTool {
    fn name(&self) -> &str {
        "remove-duplicate-lines"
    }

    fn call(&self, input: String) -> ExecutionResult {
        DedupConfig::parse(input)
            .map(|config| {
                let (result, removed) =
                    remove_duplicate_lines(&config.text, config.case_sensitive, config.trim);
                serde_json::json!({ "result": result, "removed": removed })
            })
            .into()
    }
}

// ---------------------------------------------------------------------------
// Sort

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Alphabetical,
    Length,
    Numeric,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    pub text: String,
    #[serde(default)]
    pub mode: SortMode,
    #[serde(default)]
    pub descending: bool,
}

impl ToolConfig for SortConfig {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self {
            text: input,
            mode: SortMode::default(),
            descending: false,
        })
    }
}

fn alphabetical(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn leading_number(line: &str) -> Option<f64> {
    line.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Sort non-blank lines.
///
/// Numeric mode puts lines that parse as numbers first, in numeric order,
/// followed by the remaining lines alphabetically.
pub fn sort_lines(text: &str, mode: SortMode, descending: bool) -> Vec<String> {
    let mut lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    match mode {
        SortMode::Alphabetical => lines.sort_by(|a, b| alphabetical(a, b)),
        SortMode::Length => lines.sort_by(|a, b| {
            a.chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| alphabetical(a, b))
        }),
        SortMode::Numeric => lines.sort_by(|a, b| match (leading_number(a), leading_number(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => alphabetical(a, b),
        }),
    }
    if descending {
        lines.reverse();
    }
    lines.into_iter().map(str::to_string).collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextSortingTool;

impl Tool for TextSortingTool {
    fn name(&self) -> &str {
        "text-sorting-tool"
    }

    fn call(&self, input: String) -> ExecutionResult {
        SortConfig::parse(input)
            .map(|config| {
                let lines = sort_lines(&config.text, config.mode, config.descending);
                serde_json::json!({ "lines": lines.len(), "result": lines.join("\n") })
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_with_escaped_newline_separator() {
        assert_eq!(repeat_text("ab", 3, Some(", ")).unwrap(), "ab, ab, ab");
        assert_eq!(repeat_text("x", 2, Some("\\n")).unwrap(), "x\nx");
        assert_eq!(repeat_text("x", 2, None).unwrap(), "x\nx");
        assert_eq!(repeat_text("x", 1, Some("-")).unwrap(), "x");
    }

    #[test]
    fn repeat_bounds() {
        assert!(repeat_text("x", 0, None).is_err());
        assert!(repeat_text("x", MAX_REPEAT + 1, None).is_err());
        assert!(repeat_text("", 3, None).is_err());
        assert!(TextRepeaterTool.call("no count".into()).is_failure());
    }

    #[test]
    fn dedup_keeps_first_original_line() {
        let (out, removed) = remove_duplicate_lines("Apple\n apple \nBanana\napple", false, true);
        assert_eq!(out, "Apple\nBanana");
        assert_eq!(removed, 2);

        let (out, removed) = remove_duplicate_lines("Apple\napple", true, true);
        assert_eq!(out, "Apple\napple");
        assert_eq!(removed, 0);

        let (out, _) = remove_duplicate_lines("a\n a", false, false);
        assert_eq!(out, "a\n a");
    }

    #[test]
    fn sorts_alphabetically_and_by_length() {
        let text = "banana\n\nApple\ncherry\nfig";
        assert_eq!(
            sort_lines(text, SortMode::Alphabetical, false),
            ["Apple", "banana", "cherry", "fig"]
        );
        assert_eq!(
            sort_lines(text, SortMode::Length, false),
            ["fig", "Apple", "banana", "cherry"]
        );
        assert_eq!(
            sort_lines(text, SortMode::Alphabetical, true),
            ["fig", "cherry", "banana", "Apple"]
        );
    }

    #[test]
    fn numeric_sort_puts_text_last() {
        let text = "10\nbeta\n2\n-1.5\nalpha";
        assert_eq!(
            sort_lines(text, SortMode::Numeric, false),
            ["-1.5", "2", "10", "alpha", "beta"]
        );
    }

    #[test]
    fn sort_tool_output() {
        let out = TextSortingTool
            .call(r#"{"text":"b\na","mode":"alphabetical"}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["result"], "a\nb");
        assert_eq!(out["lines"], 2);
    }
}
