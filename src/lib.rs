//! # Toolbox Online
//!
//! A catalog of small online utilities: text, conversion, calculation,
//! security, generation and marketing helpers, each reachable by a stable
//! slug and served as HTML pages, a JSON API and a command line.
//!
//! ## Crates
//!
//! - [`core`]: the [`Tool`] contract, [`ToolDescriptor`] metadata and
//!   identifiers such as [`ToolSlug`] and [`RequestId`]
//! - [`memory`]: key/value stores backing the online notepad
//! - [`tools`]: every standard tool and the [`InMemoryToolRegistry`]
//! - [`http`]: the axum server with pages, API, health and OpenAPI docs
//!
//! ## Quick Start
//!
//! ```rust
//! use toolbox_workspace::{StandardToolsConfig, ToolCall, ToolRegistry, standard_registry};
//!
//! let registry = standard_registry(StandardToolsConfig::default()).unwrap();
//! let result = registry
//!     .dispatch(ToolCall::new("palindrome-checker", "Racecar").unwrap())
//!     .unwrap();
//! assert_eq!(result.output_json().unwrap()["is_palindrome"], true);
//! ```

pub use toolbox_core as core;
pub use toolbox_http as http;
pub use toolbox_memory as memory;
pub use toolbox_tools as tools;

pub use toolbox_core::{
    Category, ExecutionResult, FailureReason, RequestId, SITE_NAME, Tool, ToolCall,
    ToolDescriptor, ToolSlug,
};
pub use toolbox_http::{HttpRuntimeConfig, HttpRuntimeConfigBuilder, HttpToolRuntime, serve};
pub use toolbox_memory::{FileMemory, InMemoryMemory};
pub use toolbox_tools::{InMemoryToolRegistry, StandardToolsConfig, ToolRegistry, standard_registry};
