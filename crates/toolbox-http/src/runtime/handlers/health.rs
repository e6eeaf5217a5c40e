//! Health check handler

use std::sync::OnceLock;
use std::time::Instant;

use axum::{extract::State, response::Json};

use crate::runtime::HttpToolRuntime;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Start the uptime clock. Called when the router is built.
pub(crate) fn mark_started() {
    START_TIME.get_or_init(Instant::now);
}

fn uptime_seconds() -> u64 {
    START_TIME.get_or_init(Instant::now).elapsed().as_secs()
}

/// GET /health - Liveness check with version info
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health_check(State(runtime): State<HttpToolRuntime>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "toolbox-http",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": uptime_seconds(),
        "tools": runtime.tool_registry.len(),
    }))
}
