//! Error Types
//!
//! Domain errors for the Toolbox crates:
//! - `tool`: registry lookup and tool execution errors
//! - `memory`: storage backend errors used by the notepad

mod memory;
mod tool;

pub use memory::{MemoryBackend, MemoryError, MemoryErrorKind, MemoryResult};
pub use tool::{ToolError, ToolResult};

/// Top-level error for code that spans tools and storage.
#[derive(Debug, thiserror::Error)]
pub enum ToolboxError {
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error(transparent)]
    Slug(#[from] crate::identifiers::SlugValidationError),
}

/// Result alias for [`ToolboxError`].
pub type ToolboxResult<T> = Result<T, ToolboxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::ToolSlug;
    use crate::tool::FailureReason;

    #[test]
    fn test_tool_error_not_found() {
        let error = ToolError::not_found(ToolSlug::new_unchecked("word-counter"));

        assert_eq!(error.slug(), Some("word-counter"));
        assert!(error.to_string().contains("word-counter"));
        assert!(error.to_string().contains("not found"));
    }

    #[test]
    fn test_tool_error_from_failure() {
        let slug = ToolSlug::new_unchecked("json-formatter");
        let error = ToolError::from_failure(
            slug,
            FailureReason::InvalidInput {
                message: "Invalid JSON: expected value".into(),
            },
        );

        assert!(matches!(error, ToolError::InvalidInput { .. }));
        assert!(error.to_string().contains("json-formatter"));
        assert!(error.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn test_tool_error_invalid_slug() {
        let error = ToolError::not_found_by_name("Not A Slug");
        assert!(matches!(error, ToolError::InvalidSlug { .. }));
        assert_eq!(error.slug(), None);
    }

    #[test]
    fn test_memory_error_display() {
        let error = MemoryError::store_failed(
            "onlineNotepadContent",
            MemoryBackend::File,
            MemoryErrorKind::IoError {
                details: "disk full".into(),
            },
        );
        let text = error.to_string();
        assert!(text.contains("onlineNotepadContent"));
        assert!(text.contains("file"));
        assert!(text.contains("disk full"));
    }

    #[test]
    fn test_toolbox_error_conversions() {
        let err: ToolboxError = ToolError::not_found(ToolSlug::new_unchecked("x")).into();
        assert!(matches!(err, ToolboxError::Tool(_)));

        let err: ToolboxError = ToolSlug::parse("").unwrap_err().into();
        assert!(matches!(err, ToolboxError::Slug(_)));
    }
}
