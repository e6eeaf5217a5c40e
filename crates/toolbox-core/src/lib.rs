//! # Toolbox Core
//!
//! Core traits and types shared by every Toolbox crate: the [`Tool`] trait
//! and its [`ExecutionResult`], validated [`ToolSlug`]s, catalog
//! [`ToolDescriptor`]s and the storage traits used by stateful tools.

pub mod catalog;
pub mod error;
pub mod identifiers;
pub mod memory;
pub mod tool;

pub use catalog::{Category, SITE_NAME, ToolDescriptor};
pub use error::{MemoryError, ToolError, ToolResult, ToolboxError, ToolboxResult};
pub use identifiers::{RequestId, SlugValidationError, ToolSlug};
pub use memory::{MemoryKey, MemoryReader, MemoryStore, MemoryUpdate, MemoryWriter};
pub use tool::{ExecutionResult, FailureReason, Tool, ToolCall};
