//! Tool trait and execution results.

use crate::identifiers::{SlugValidationError, ToolSlug};

/// A request to run one tool with one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    /// Which tool to run
    pub slug: ToolSlug,
    /// Raw input: a JSON object or plain text
    pub input: String,
}

impl ToolCall {
    /// Create a new tool call, validating the slug.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox_core::ToolCall;
    ///
    /// let call = ToolCall::new("word-counter", "hello world").unwrap();
    /// assert_eq!(call.slug(), "word-counter");
    ///
    /// assert!(ToolCall::new("", "input").is_err());
    /// ```
    pub fn new(slug: &str, input: &str) -> Result<Self, SlugValidationError> {
        Ok(Self {
            slug: ToolSlug::parse(slug)?,
            input: input.to_string(),
        })
    }

    /// Create a tool call from an already-validated slug
    pub fn from_slug(slug: ToolSlug, input: impl Into<String>) -> Self {
        Self {
            slug,
            input: input.into(),
        }
    }

    /// The slug of the tool being called
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
}

/// Why a tool could not produce output.
///
/// Serialized with a `type` tag so API clients can branch on the category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FailureReason {
    /// The input could not be parsed or breaks a tool rule
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    /// A looked-up record does not exist (domain, note, ...)
    #[error("Not found: {resource}")]
    NotFound { resource: String },
    /// An upstream service could not be reached or answered badly
    #[error("Network error: {message}")]
    NetworkError { message: String },
    /// The notepad store failed
    #[error("I/O error: {message}")]
    IoError { message: String },
    #[error("Timeout: {operation}")]
    Timeout { operation: String },
    /// A bug or unexpected state inside the tool
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl FailureReason {
    /// Category prefix plus detail, as shown to users.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The bare detail without the category prefix
    pub fn detail(&self) -> &str {
        match self {
            FailureReason::InvalidInput { message }
            | FailureReason::NetworkError { message }
            | FailureReason::IoError { message }
            | FailureReason::InternalError { message } => message,
            FailureReason::NotFound { resource } => resource,
            FailureReason::Timeout { operation } => operation,
        }
    }
}

/// Outcome of one [`Tool::call`]: output text (a JSON document for every
/// standard tool) or a [`FailureReason`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    Success { output: String },
    Failure { reason: FailureReason },
}

impl ExecutionResult {
    pub fn success(output: String) -> Self {
        ExecutionResult::Success { output }
    }

    /// Success whose output is the compact serialization of `value`.
    pub fn json(value: serde_json::Value) -> Self {
        Self::success(value.to_string())
    }

    pub fn failed(reason: FailureReason) -> Self {
        ExecutionResult::Failure { reason }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::failed(FailureReason::InvalidInput {
            message: message.into(),
        })
    }

    /// Failure for conditions the caller cannot fix, reported as
    /// [`FailureReason::InternalError`].
    pub fn failure(message: String) -> Self {
        Self::failed(FailureReason::InternalError { message })
    }

    /// Borrowing view as a `Result`.
    pub fn as_result(&self) -> Result<&str, &FailureReason> {
        match self {
            ExecutionResult::Success { output } => Ok(output),
            ExecutionResult::Failure { reason } => Err(reason),
        }
    }

    pub fn is_success(&self) -> bool {
        self.as_result().is_ok()
    }

    pub fn is_failure(&self) -> bool {
        self.as_result().is_err()
    }

    /// Output on success, otherwise the user-facing failure message.
    pub fn output(&self) -> String {
        match self.as_result() {
            Ok(output) => output.to_string(),
            Err(reason) => reason.message(),
        }
    }

    pub fn success_output(&self) -> Option<&str> {
        self.as_result().ok()
    }

    pub fn failure_reason(&self) -> Option<&FailureReason> {
        self.as_result().err()
    }

    /// Successful output parsed as JSON; `None` for failures and plain text.
    pub fn output_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.success_output()?).ok()
    }

    pub fn into_result(self) -> Result<String, FailureReason> {
        match self {
            ExecutionResult::Success { output } => Ok(output),
            ExecutionResult::Failure { reason } => Err(reason),
        }
    }
}

impl From<Result<serde_json::Value, FailureReason>> for ExecutionResult {
    fn from(result: Result<serde_json::Value, FailureReason>) -> Self {
        match result {
            Ok(value) => ExecutionResult::json(value),
            Err(reason) => ExecutionResult::failed(reason),
        }
    }
}

/// Core trait for every utility in the catalog.
///
/// Tools are synchronous: `call` takes the raw input string and returns an
/// [`ExecutionResult`]. Tools that need I/O bridge to async internally.
///
/// # Example
///
/// ```rust
/// use toolbox_core::{ExecutionResult, Tool};
///
/// struct ReverseTool;
///
/// impl Tool for ReverseTool {
///     fn name(&self) -> &str {
///         "text-reverser"
///     }
///
///     fn call(&self, input: String) -> ExecutionResult {
///         ExecutionResult::success(input.chars().rev().collect())
///     }
/// }
///
/// assert_eq!(ReverseTool.call("abc".into()).output(), "cba");
/// ```
pub trait Tool: Send + Sync {
    /// The slug this tool is registered under.
    fn name(&self) -> &str;

    /// JSON Schema describing the input object, if the tool takes options.
    fn input_schema(&self) -> Option<serde_json::Value> {
        None
    }

    /// Run the tool. Bad input is a [`FailureReason::InvalidInput`], never a panic.
    fn call(&self, input: String) -> ExecutionResult;
}
