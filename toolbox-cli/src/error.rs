use toolbox_core::FailureReason;
use toolbox_http::{ConfigError, ServeError};
use toolbox_tools::RegistryError;

/// Errors surfaced by the `toolbox` binary. Every variant exits with code 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build tool registry: {0}")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Serve(#[from] ServeError),

    #[error("Unknown tool '{0}'. Run `toolbox list` to see every slug")]
    UnknownTool(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    ToolFailed(FailureReason),
}
