//! # Productivity
//!
//! The online notepad is the only tool in the catalog that keeps state.

pub mod notepad;
pub mod timer;

pub use notepad::{
    NOTEPAD_KEY, NOTEPAD_TIMESTAMP_KEY, Note, NotepadCommand, NotepadTool, SharedStore,
    shared_store,
};
pub use timer::{
    CountdownInput, CountdownTimerTool, StopwatchTool, countdown, format_clock, format_stopwatch,
    lap_splits,
};
