//! HTTP request handlers

pub mod health;
pub mod pages;
pub mod tools;

pub use health::health_check;
pub use pages::{home_page, tool_page};
pub use tools::{get_tool, list_categories, list_tools, run_tool};
