//! # Network Tools
//!
//! Tools backed by third-party HTTP services. [`Tool::call`] is synchronous,
//! so each request is driven to completion through [`run_async`].
//!
//! [`Tool::call`]: toolbox_core::Tool::call

use std::future::Future;
use std::time::Duration;

use toolbox_core::{ExecutionResult, FailureReason};

pub mod ip;

pub use ip::{DEFAULT_IPIFY_URL, IpAddressCheckerTool};

/// Per-request timeout used when none is configured.
pub const DEFAULT_NETWORK_TIMEOUT: Duration = Duration::from_secs(10);

/// Execute an async operation on the current runtime, or on a fresh one when
/// called outside of tokio.
///
/// Inside a runtime this needs the multi-threaded flavor (or a blocking-pool
/// thread), since it parks the calling thread.
pub(crate) fn run_async<F, Fut>(f: F) -> ExecutionResult
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ExecutionResult>,
{
    if tokio::runtime::Handle::try_current().is_ok() {
        tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(f()))
    } else {
        match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(f()),
            Err(e) => ExecutionResult::failure(format!("Failed to create async runtime: {}", e)),
        }
    }
}

/// Classify a transport error.
pub(crate) fn request_failure(service: &str, error: reqwest::Error) -> FailureReason {
    tracing::warn!(service, error = %error, "Upstream request failed");
    if error.is_timeout() {
        FailureReason::Timeout {
            operation: format!("{} request", service),
        }
    } else {
        FailureReason::NetworkError {
            message: format!("{} request failed: {}", service, error),
        }
    }
}
