//! # Design Tools

pub mod picker;

pub use picker::{ColorPickerTool, Hsl, rgb_to_hsl};
