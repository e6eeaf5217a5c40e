//! Error handling for the HTTP runtime
//!
//! Maps tool failures and request problems onto HTTP status codes and a
//! structured [`ErrorResponse`] that always carries the request ID.

use axum::{
    extract::{Request, rejection::JsonRejection},
    http::{
        StatusCode,
        header::{self, HeaderValue},
    },
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use toolbox_core::{FailureReason, ToolSlug};

pub use toolbox_core::RequestId;

/// The request's [`RequestId`], readable with `Extension<RequestIdExtension>`
#[derive(Debug, Clone)]
pub struct RequestIdExtension(pub RequestId);

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag every request with an ID and echo it in the `X-Request-ID` response header.
///
/// A client-supplied ID is kept when [`RequestId::parse`] accepts it; anything
/// else is replaced by a fresh UUID v4.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(RequestId::parse)
        .unwrap_or_else(RequestId::generate);

    request
        .extensions_mut()
        .insert(RequestIdExtension(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(header::HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

/// Machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ToolNotFound,
    ResourceNotFound,
    InvalidInput,
    InvalidJson,
    PayloadTooLarge,
    UpstreamError,
    Timeout,
    StorageError,
    ToolExecutionFailed,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolNotFound => "tool_not_found",
            Self::ResourceNotFound => "resource_not_found",
            Self::InvalidInput => "invalid_input",
            Self::InvalidJson => "invalid_json",
            Self::PayloadTooLarge => "payload_too_large",
            Self::UpstreamError => "upstream_error",
            Self::Timeout => "timeout",
            Self::StorageError => "storage_error",
            Self::ToolExecutionFailed => "tool_execution_failed",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured error body returned by every JSON endpoint
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Stable code from [`ErrorCode`]
    pub error: String,
    /// Message safe to show to end users
    pub message: String,
    /// Field-level context for client errors
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
    /// Same value as the `X-Request-ID` response header
    #[schema(value_type = String)]
    pub request_id: RequestId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str, request_id: RequestId) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            request_id,
            timestamp: Some(chrono::Utc::now()),
        }
    }

    pub fn with_details<T: Serialize>(mut self, details: T) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }
}

/// What went wrong, independent of which request it happened in
#[derive(Debug, Clone)]
pub enum RuntimeErrorKind {
    /// No tool is registered under the slug
    ToolNotFound { slug: String },

    /// The tool rejected its input
    InvalidInput { field: String, reason: String },

    /// The request body is not the expected JSON
    InvalidJson { reason: String },

    /// The request body exceeds the configured limit
    PayloadTooLarge,

    /// Something the tool looked up does not exist
    ResourceNotFound { resource: String },

    /// A third-party service failed
    UpstreamError { reason: String },

    /// An operation did not finish in time
    Timeout { operation: String },

    /// The notepad store failed
    StorageError { reason: String },

    /// The tool failed for an internal reason
    ToolExecutionFailed { slug: String, reason: String },

    /// Failure inside the runtime itself
    InternalError { reason: String },
}

/// Runtime error with the request ID lifted to the top level
#[derive(Debug)]
pub struct RuntimeError {
    pub request_id: RequestId,
    pub kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, request_id: RequestId) -> Self {
        Self { request_id, kind }
    }

    pub fn tool_not_found(slug: impl Into<String>, request_id: RequestId) -> Self {
        Self::new(RuntimeErrorKind::ToolNotFound { slug: slug.into() }, request_id)
    }

    pub fn invalid_json(reason: impl Into<String>, request_id: RequestId) -> Self {
        Self::new(
            RuntimeErrorKind::InvalidJson {
                reason: reason.into(),
            },
            request_id,
        )
    }

    pub fn internal_error(reason: impl Into<String>, request_id: RequestId) -> Self {
        Self::new(
            RuntimeErrorKind::InternalError {
                reason: reason.into(),
            },
            request_id,
        )
    }

    /// Classify a body rejection. Oversized bodies keep their 413.
    pub fn from_json_rejection(rejection: JsonRejection, request_id: RequestId) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::new(RuntimeErrorKind::PayloadTooLarge, request_id)
        } else {
            Self::invalid_json(rejection.body_text(), request_id)
        }
    }

    /// Translate a tool's [`FailureReason`].
    pub fn from_failure(slug: &ToolSlug, reason: FailureReason, request_id: RequestId) -> Self {
        let kind = match reason {
            FailureReason::InvalidInput { message } => RuntimeErrorKind::InvalidInput {
                field: "input".to_string(),
                reason: message,
            },
            FailureReason::NotFound { resource } => RuntimeErrorKind::ResourceNotFound { resource },
            FailureReason::NetworkError { message } => {
                RuntimeErrorKind::UpstreamError { reason: message }
            }
            FailureReason::Timeout { operation } => RuntimeErrorKind::Timeout { operation },
            FailureReason::IoError { message } => {
                RuntimeErrorKind::StorageError { reason: message }
            }
            FailureReason::InternalError { message } => RuntimeErrorKind::ToolExecutionFailed {
                slug: slug.to_string(),
                reason: message,
            },
        };
        Self::new(kind, request_id)
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn kind(&self) -> &RuntimeErrorKind {
        &self.kind
    }

    pub fn status_code(&self) -> StatusCode {
        match &self.kind {
            RuntimeErrorKind::ToolNotFound { .. } => StatusCode::NOT_FOUND,
            RuntimeErrorKind::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            RuntimeErrorKind::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            RuntimeErrorKind::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            RuntimeErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RuntimeErrorKind::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            RuntimeErrorKind::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            RuntimeErrorKind::StorageError { .. }
            | RuntimeErrorKind::ToolExecutionFailed { .. }
            | RuntimeErrorKind::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match &self.kind {
            RuntimeErrorKind::ToolNotFound { .. } => ErrorCode::ToolNotFound,
            RuntimeErrorKind::ResourceNotFound { .. } => ErrorCode::ResourceNotFound,
            RuntimeErrorKind::InvalidInput { .. } => ErrorCode::InvalidInput,
            RuntimeErrorKind::InvalidJson { .. } => ErrorCode::InvalidJson,
            RuntimeErrorKind::PayloadTooLarge => ErrorCode::PayloadTooLarge,
            RuntimeErrorKind::UpstreamError { .. } => ErrorCode::UpstreamError,
            RuntimeErrorKind::Timeout { .. } => ErrorCode::Timeout,
            RuntimeErrorKind::StorageError { .. } => ErrorCode::StorageError,
            RuntimeErrorKind::ToolExecutionFailed { .. } => ErrorCode::ToolExecutionFailed,
            RuntimeErrorKind::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Build the client-facing body.
    ///
    /// Input problems are echoed back so the caller can fix them. Upstream,
    /// storage and internal details stay in the server log.
    pub fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(
            self.error_code().as_str(),
            &self.user_facing_message(),
            self.request_id.clone(),
        );

        match &self.kind {
            RuntimeErrorKind::ToolNotFound { slug } => {
                response.with_details(serde_json::json!({ "slug": slug }))
            }
            RuntimeErrorKind::InvalidInput { field, reason } => {
                response.with_details(serde_json::json!({ "field": field, "reason": reason }))
            }
            RuntimeErrorKind::InvalidJson { reason } => {
                response.with_details(serde_json::json!({ "reason": reason }))
            }
            RuntimeErrorKind::ResourceNotFound { resource } => {
                response.with_details(serde_json::json!({ "resource": resource }))
            }
            _ => response,
        }
    }

    fn user_facing_message(&self) -> String {
        match &self.kind {
            RuntimeErrorKind::ToolNotFound { slug } => format!("No tool named '{}'.", slug),
            RuntimeErrorKind::InvalidInput { reason, .. } => format!("Invalid input: {}", reason),
            RuntimeErrorKind::InvalidJson { .. } => {
                "The request body must be JSON like {\"input\": ...}.".to_string()
            }
            RuntimeErrorKind::PayloadTooLarge => "Request body is too large.".to_string(),
            RuntimeErrorKind::ResourceNotFound { resource } => format!("Not found: {}", resource),
            RuntimeErrorKind::UpstreamError { .. } => {
                "An upstream service could not be reached. Please try again later.".to_string()
            }
            RuntimeErrorKind::Timeout { operation } => format!("{} took too long.", operation),
            RuntimeErrorKind::StorageError { .. } => {
                "The notepad storage is unavailable.".to_string()
            }
            RuntimeErrorKind::ToolExecutionFailed { .. } => {
                "The tool could not complete the request.".to_string()
            }
            RuntimeErrorKind::InternalError { .. } => "Something went wrong on our side.".to_string(),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            RuntimeErrorKind::ToolNotFound { slug } => write!(f, "Tool not found: {}", slug),
            RuntimeErrorKind::InvalidInput { field, reason } => {
                write!(f, "Invalid input in '{}': {}", field, reason)
            }
            RuntimeErrorKind::InvalidJson { reason } => write!(f, "Invalid JSON: {}", reason),
            RuntimeErrorKind::PayloadTooLarge => write!(f, "Payload too large"),
            RuntimeErrorKind::ResourceNotFound { resource } => {
                write!(f, "Resource not found: {}", resource)
            }
            RuntimeErrorKind::UpstreamError { reason } => write!(f, "Upstream error: {}", reason),
            RuntimeErrorKind::Timeout { operation } => write!(f, "Timeout: {}", operation),
            RuntimeErrorKind::StorageError { reason } => write!(f, "Storage error: {}", reason),
            RuntimeErrorKind::ToolExecutionFailed { slug, reason } => {
                write!(f, "Tool '{}' failed: {}", slug, reason)
            }
            RuntimeErrorKind::InternalError { reason } => write!(f, "Internal error: {}", reason),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl IntoResponse for RuntimeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(code = %code, request_id = %self.request_id, status = %status, error = %self, "Request failed");
        } else {
            tracing::debug!(code = %code, request_id = %self.request_id, status = %status, error = %self, "Request rejected");
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Handler result; the error renders itself as an [`ErrorResponse`]
pub type RuntimeResult<T> = Result<T, RuntimeError>;
