//! Tool lookup and execution errors.

use crate::identifiers::{SlugValidationError, ToolSlug};
use crate::tool::FailureReason;

/// Errors that can occur while dispatching a tool call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// Tool was not found in the registry.
    #[error("Tool '{slug}' not found in registry")]
    NotFound { slug: ToolSlug },

    /// The tool rejected its input.
    #[error("Tool '{slug}' received invalid input: {reason}")]
    InvalidInput { slug: ToolSlug, reason: String },

    /// The tool ran but failed.
    #[error("Tool '{slug}' execution failed: {reason}")]
    ExecutionFailed {
        slug: ToolSlug,
        reason: FailureReason,
    },

    /// The tool did not finish in time.
    #[error("Tool '{slug}' timed out after {duration_ms}ms")]
    Timeout { slug: ToolSlug, duration_ms: u64 },

    /// The requested name is not a valid slug.
    #[error("Invalid tool slug '{attempted}': {error}")]
    InvalidSlug {
        attempted: String,
        error: SlugValidationError,
    },
}

impl ToolError {
    pub fn not_found(slug: ToolSlug) -> Self {
        ToolError::NotFound { slug }
    }

    /// `NotFound` for a raw name, or `InvalidSlug` if it does not parse.
    pub fn not_found_by_name(name: &str) -> Self {
        match ToolSlug::parse(name) {
            Ok(slug) => ToolError::NotFound { slug },
            Err(error) => ToolError::InvalidSlug {
                attempted: name.to_string(),
                error,
            },
        }
    }

    /// Lift a tool's failure reason into a dispatch error.
    pub fn from_failure(slug: ToolSlug, reason: FailureReason) -> Self {
        match reason {
            FailureReason::InvalidInput { message } => ToolError::InvalidInput {
                slug,
                reason: message,
            },
            reason => ToolError::ExecutionFailed { slug, reason },
        }
    }

    /// The slug involved, if it was valid.
    pub fn slug(&self) -> Option<&str> {
        match self {
            ToolError::NotFound { slug }
            | ToolError::InvalidInput { slug, .. }
            | ToolError::ExecutionFailed { slug, .. }
            | ToolError::Timeout { slug, .. } => Some(slug.as_str()),
            ToolError::InvalidSlug { .. } => None,
        }
    }
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
