//! # Text Utilities
//!
//! Counting, case conversion, palindromes, line processing and diffs.

pub mod case;
pub mod counters;
pub mod diff;
pub mod lines;
pub mod palindrome;

pub use case::{CaseConverterTool, CaseMode, convert_case};
pub use counters::{CharacterCounterTool, TextInput, TextStats, WordCounterTool, text_stats};
pub use diff::{DiffMode, DiffSegment, SegmentTag, TextDiffTool, diff_text};
pub use lines::{
    RemoveDuplicateLinesTool, SortMode, TextRepeaterTool, TextSortingTool, remove_duplicate_lines,
    repeat_text, sort_lines,
};
pub use palindrome::{PalindromeCheckerTool, is_palindrome};
