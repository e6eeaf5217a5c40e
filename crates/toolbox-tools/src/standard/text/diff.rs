//! Character, word and line diffs.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::ToolConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    Chars,
    Words,
    #[default]
    Lines,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiffConfig {
    pub original: String,
    pub modified: String,
    #[serde(default)]
    pub mode: DiffMode,
}

impl ToolConfig for DiffConfig {
    fn from_simple(_: String) -> Option<Self> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentTag {
    Equal,
    Insert,
    Delete,
}

impl From<ChangeTag> for SegmentTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => SegmentTag::Equal,
            ChangeTag::Insert => SegmentTag::Insert,
            ChangeTag::Delete => SegmentTag::Delete,
        }
    }
}

/// A run of text sharing one change tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSegment {
    pub tag: SegmentTag,
    pub value: String,
}

/// Diff two texts, merging adjacent changes with the same tag.
pub fn diff_text(original: &str, modified: &str, mode: DiffMode) -> Vec<DiffSegment> {
    let diff = match mode {
        DiffMode::Chars => TextDiff::from_chars(original, modified),
        DiffMode::Words => TextDiff::from_words(original, modified),
        DiffMode::Lines => TextDiff::from_lines(original, modified),
    };

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let tag = SegmentTag::from(change.tag());
        match segments.last_mut() {
            Some(last) if last.tag == tag => last.value.push_str(change.value()),
            _ => segments.push(DiffSegment {
                tag,
                value: change.value().to_string(),
            }),
        }
    }
    segments
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextDiffTool;

impl Tool for TextDiffTool {
    fn name(&self) -> &str {
        "text-diff-checker"
    }

    fn call(&self, input: String) -> ExecutionResult {
        DiffConfig::parse(input)
            .map(|config| {
                let segments = diff_text(&config.original, &config.modified, config.mode);
                let count = |tag: SegmentTag| segments.iter().filter(|s| s.tag == tag).count();
                serde_json::json!({
                    "identical": segments.iter().all(|s| s.tag == SegmentTag::Equal),
                    "insertions": count(SegmentTag::Insert),
                    "deletions": count(SegmentTag::Delete),
                    "segments": segments,
                })
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(segments: &[DiffSegment], keep: SegmentTag) -> String {
        segments
            .iter()
            .filter(|s| s.tag == SegmentTag::Equal || s.tag == keep)
            .map(|s| s.value.as_str())
            .collect()
    }

    #[test]
    fn line_diff_reconstructs_both_sides() {
        let a = "one\ntwo\nthree\n";
        let b = "one\n2\nthree\nfour\n";
        let segments = diff_text(a, b, DiffMode::Lines);
        assert_eq!(rebuild(&segments, SegmentTag::Delete), a);
        assert_eq!(rebuild(&segments, SegmentTag::Insert), b);
        assert!(segments.iter().any(|s| s.tag == SegmentTag::Delete && s.value == "two\n"));
    }

    #[test]
    fn char_diff_merges_runs() {
        let segments = diff_text("kitten", "sitting", DiffMode::Chars);
        assert_eq!(rebuild(&segments, SegmentTag::Delete), "kitten");
        assert_eq!(rebuild(&segments, SegmentTag::Insert), "sitting");
        for pair in segments.windows(2) {
            assert_ne!(pair[0].tag, pair[1].tag);
        }
    }

    #[test]
    fn identical_texts() {
        let out = TextDiffTool
            .call(r#"{"original":"same words","modified":"same words","mode":"words"}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["identical"], true);
        assert_eq!(out["insertions"], 0);
    }

    #[test]
    fn requires_both_texts() {
        assert!(TextDiffTool.call("just one text".into()).is_failure());
    }
}
