//! HTTP runtime: state, configuration, routing and request handlers.

pub mod api_types;
pub mod config;
#[cfg(feature = "openapi")]
pub mod docs;
pub mod error;
pub mod handlers;
pub mod http;
pub mod render;
pub mod router;
pub mod shutdown;

pub use api_types::{
    CategorySummary, RunToolRequest, RunToolResponse, ToolDetail, ToolListQuery, ToolSummary,
};
pub use config::{ConfigError, HttpRuntimeConfigBuilder};
pub use error::{
    ErrorCode, ErrorResponse, RequestIdExtension, RuntimeError, RuntimeErrorKind, RuntimeResult,
    request_id_middleware,
};
pub use http::{HttpRuntimeConfig, HttpToolRuntime, ServeError, serve};
pub use shutdown::shutdown_signal;
