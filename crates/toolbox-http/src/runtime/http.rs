//! Runtime state and server entry point.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use toolbox_core::{ExecutionResult, RequestId, ToolCall, ToolError};
use toolbox_memory::{FileMemory, InMemoryMemory};
use toolbox_tools::standard::{
    DEFAULT_IPIFY_URL, DEFAULT_NETWORK_TIMEOUT, DEFAULT_RDAP_URL, shared_store,
};
use toolbox_tools::{
    InMemoryToolRegistry, RegistryError, StandardToolsConfig, ToolRegistry, standard_registry,
};
use tracing::{debug, info};

use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::shutdown::shutdown_signal;

/// HTTP server state shared by every handler
#[derive(Clone)]
pub struct HttpToolRuntime {
    pub tool_registry: Arc<InMemoryToolRegistry>,
}

impl std::fmt::Debug for HttpToolRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpToolRuntime")
            .field("tools", &self.tool_registry.len())
            .finish()
    }
}

impl HttpToolRuntime {
    pub fn new(tool_registry: InMemoryToolRegistry) -> Self {
        Self {
            tool_registry: Arc::new(tool_registry),
        }
    }

    /// Build the standard catalog with the backends named in `config`.
    pub fn from_config(config: &HttpRuntimeConfig) -> Result<Self, RegistryError> {
        Ok(Self::new(standard_registry(config.tools_config())?))
    }

    /// Run a tool call on the blocking pool.
    ///
    /// Tools are synchronous and the network tools park their thread while
    /// the request is in flight, so they must stay off the async workers.
    pub async fn execute(
        &self,
        call: ToolCall,
        request_id: &RequestId,
    ) -> RuntimeResult<ExecutionResult> {
        let registry = Arc::clone(&self.tool_registry);
        let slug = call.slug.clone();
        debug!(tool = %slug, request_id = %request_id, "Running tool");

        let dispatched = tokio::task::spawn_blocking(move || registry.try_dispatch(&call))
            .await
            .map_err(|e| {
                RuntimeError::internal_error(format!("tool task failed: {e}"), request_id.clone())
            })?;

        match dispatched {
            Ok(result) => Ok(result),
            Err(ToolError::NotFound { slug }) => {
                Err(RuntimeError::tool_not_found(slug.as_str(), request_id.clone()))
            }
            Err(other) => Err(RuntimeError::internal_error(
                other.to_string(),
                request_id.clone(),
            )),
        }
    }
}

/// HTTP runtime configuration
#[derive(Debug, Clone)]
pub struct HttpRuntimeConfig {
    /// Address the server listens on
    pub bind_addr: SocketAddr,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
    /// Enable CORS for cross-origin requests
    pub enable_cors: bool,
    /// Enable OpenAPI documentation endpoints
    pub enable_openapi: bool,
    /// JSON file backing the online notepad; in-memory when unset
    pub notepad_path: Option<PathBuf>,
    /// ipify endpoint used by the IP address checker
    pub ipify_url: String,
    /// RDAP base URL used by the domain age checker
    pub rdap_url: String,
    /// Per-request timeout of outbound calls, in seconds
    pub network_timeout_secs: u64,
}

impl Default for HttpRuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            request_timeout_secs: 30,
            max_body_size: 8 * 1024 * 1024, // 8MB
            enable_cors: true,
            enable_openapi: true,
            notepad_path: None,
            ipify_url: DEFAULT_IPIFY_URL.to_string(),
            rdap_url: DEFAULT_RDAP_URL.to_string(),
            network_timeout_secs: DEFAULT_NETWORK_TIMEOUT.as_secs(),
        }
    }
}

impl HttpRuntimeConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Backends for the stateful and network tools.
    pub fn tools_config(&self) -> StandardToolsConfig {
        let notepad_store = match &self.notepad_path {
            Some(path) => shared_store(FileMemory::new(path.clone())),
            None => shared_store(InMemoryMemory::new()),
        };
        StandardToolsConfig {
            notepad_store,
            ipify_url: self.ipify_url.clone(),
            rdap_url: self.rdap_url.clone(),
            network_timeout: Duration::from_secs(self.network_timeout_secs),
        }
    }
}

/// Errors that stop the server from starting or running
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("Failed to build tool registry: {0}")]
    Registry(#[from] RegistryError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the standard catalog, bind `config.bind_addr` and serve until
/// SIGINT or SIGTERM.
pub async fn serve(config: HttpRuntimeConfig) -> Result<(), ServeError> {
    let runtime = HttpToolRuntime::from_config(&config)?;
    let tools = runtime.tool_registry.len();
    let app = runtime.router_with_config(&config);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    info!(
        addr = %config.bind_addr,
        tools,
        notepad = ?config.notepad_path,
        "Toolbox HTTP runtime listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Toolbox HTTP runtime stopped");
    Ok(())
}
