//! # Standard Tool Library
//!
//! Every utility in the catalog, grouped by the category it is listed under.
//! Each tool is a unit struct (or a small struct holding its client or
//! store) implementing [`Tool`](toolbox_core::Tool); the pure functions the
//! tools wrap are exported alongside them.
//!
//! ## Usage
//!
//! ```rust
//! use toolbox_tools::{Tool, standard::PalindromeCheckerTool};
//!
//! let out = PalindromeCheckerTool.call("A man a plan a canal Panama".into());
//! assert_eq!(out.output_json().unwrap()["is_palindrome"], true);
//! ```

/// Age, BMI, loan and percentage calculators
pub mod calc;
/// Number, unit, date, color and image conversions
pub mod convert;
/// Color picker
pub mod design;
/// Encoders, formatters and minifiers
pub mod dev;
/// Lorem ipsum, passwords and QR codes
pub mod generators;
/// SEO, marketing and media helpers
pub mod marketing;
/// Tools that call third-party HTTP services
#[cfg(feature = "network")]
pub mod network;
/// Notepad, stopwatch and countdown
pub mod productivity;
/// Encryption and hashing
pub mod security;
/// Text utilities
pub mod text;
/// Syntax checks
pub mod validation;

pub use calc::*;
pub use convert::*;
pub use design::*;
pub use dev::*;
pub use generators::*;
pub use marketing::*;
#[cfg(feature = "network")]
pub use network::*;
pub use productivity::*;
pub use security::*;
pub use text::*;
pub use validation::*;
