//! # Toolbox Tools
//!
//! The standard library of Toolbox utilities and the registry that routes a
//! slug to its implementation.
//!
//! ## Layout
//!
//! - [`standard`]: every tool, grouped by catalog category
//! - [`registry`]: [`ToolRegistry`] and the [`InMemoryToolRegistry`] that
//!   pairs tools with their [`ToolDescriptor`](toolbox_core::ToolDescriptor)
//! - [`catalog`]: the descriptor table and [`standard_registry`]
//!
//! ## Features
//!
//! - `network` (default): the IP address and domain age checkers, which call
//!   ipify and RDAP through `reqwest`
//!
//! ```rust
//! use toolbox_core::ToolCall;
//! use toolbox_tools::{StandardToolsConfig, ToolRegistry, standard_registry};
//!
//! let registry = standard_registry(StandardToolsConfig::default()).unwrap();
//! let result = registry
//!     .dispatch(ToolCall::new("temperature-converter", "100").unwrap())
//!     .unwrap();
//! assert_eq!(result.output_json().unwrap()["fahrenheit"], 212.0);
//! ```

/// Descriptor table for the standard catalog.
pub mod catalog;
/// Input parsing shared by the standard tools.
pub mod core;
/// Tool registry implementations.
pub mod registry;
/// Standard tool library.
pub mod standard;

pub use catalog::{CatalogEntry, StandardToolsConfig, standard_registry, standard_tools};
pub use core::{ToolConfig, invalid_input};
pub use registry::{InMemoryToolRegistry, RegistryError, ToolRegistry};
pub use toolbox_core::{ExecutionResult, FailureReason, Tool, ToolCall};
