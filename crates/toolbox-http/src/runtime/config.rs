//! # Environment-Based Configuration
//!
//! Loads [`HttpRuntimeConfig`] from `TOOLBOX_*` environment variables so a
//! deployment can be reconfigured without a rebuild.
//!
//! ## Environment Variables
//!
//! ### HTTP Runtime
//! - `TOOLBOX_BIND_ADDR` - Listen address (default: 127.0.0.1:3000)
//! - `TOOLBOX_REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! - `TOOLBOX_MAX_BODY_SIZE` - Maximum request body size in bytes (default: 8388608 / 8MB)
//! - `TOOLBOX_ENABLE_CORS` - Enable CORS (default: true)
//! - `TOOLBOX_ENABLE_OPENAPI` - Enable OpenAPI docs (default: true)
//!
//! ### Tools
//! - `TOOLBOX_NOTEPAD_PATH` - JSON file backing the online notepad (default: in-memory)
//! - `TOOLBOX_IPIFY_URL` - ipify endpoint (default: https://api.ipify.org)
//! - `TOOLBOX_RDAP_URL` - RDAP base URL (default: https://rdap.org)
//! - `TOOLBOX_NETWORK_TIMEOUT_SECS` - Outbound request timeout in seconds (default: 10)

use crate::runtime::HttpRuntimeConfig;
use std::{env, net::SocketAddr, path::PathBuf};

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const MAX_BODY_SIZE: usize = 64 * 1024 * 1024;
const MAX_NETWORK_TIMEOUT_SECS: u64 = 120;

/// Why a configuration could not be loaded or accepted
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable '{key}': {message}")]
    InvalidEnvVar { key: String, message: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Builder for [`HttpRuntimeConfig`] with environment variable support
#[derive(Debug, Clone, Default)]
pub struct HttpRuntimeConfigBuilder {
    config: HttpRuntimeConfig,
}

impl HttpRuntimeConfigBuilder {
    /// Builder seeded with [`HttpRuntimeConfig::default`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay every `TOOLBOX_*` variable that is set onto the defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but cannot
    /// be parsed. Range checks happen in [`build`](Self::build).
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::new();

        if let Some(addr) = get_env_parsed::<SocketAddr>("TOOLBOX_BIND_ADDR", "socket address")? {
            builder = builder.bind_addr(addr);
        }
        if let Some(timeout) = get_env_parsed::<u64>("TOOLBOX_REQUEST_TIMEOUT_SECS", "u64")? {
            builder = builder.request_timeout_secs(timeout);
        }
        if let Some(max_size) = get_env_parsed::<usize>("TOOLBOX_MAX_BODY_SIZE", "usize")? {
            builder = builder.max_body_size(max_size);
        }
        if let Some(cors) = get_env_bool("TOOLBOX_ENABLE_CORS")? {
            builder = builder.enable_cors(cors);
        }
        if let Some(openapi) = get_env_bool("TOOLBOX_ENABLE_OPENAPI")? {
            builder = builder.enable_openapi(openapi);
        }

        if let Some(path) = get_env_string("TOOLBOX_NOTEPAD_PATH") {
            builder = builder.notepad_path(PathBuf::from(path));
        }
        if let Some(url) = get_env_string("TOOLBOX_IPIFY_URL") {
            builder = builder.ipify_url(url);
        }
        if let Some(url) = get_env_string("TOOLBOX_RDAP_URL") {
            builder = builder.rdap_url(url);
        }
        if let Some(timeout) = get_env_parsed::<u64>("TOOLBOX_NETWORK_TIMEOUT_SECS", "u64")? {
            builder = builder.network_timeout_secs(timeout);
        }

        Ok(builder)
    }

    /// Set the listen address
    #[must_use]
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.config.bind_addr = addr;
        self
    }

    /// Whole-request deadline, in seconds
    #[must_use]
    pub fn request_timeout_secs(mut self, timeout: u64) -> Self {
        self.config.request_timeout_secs = timeout;
        self
    }

    /// Largest accepted request body, in bytes
    #[must_use]
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.max_body_size = size;
        self
    }

    /// Permissive CORS for browser clients
    #[must_use]
    pub fn enable_cors(mut self, enable: bool) -> Self {
        self.config.enable_cors = enable;
        self
    }

    /// Serve `/docs` and `/api-docs/openapi.json`
    #[must_use]
    pub fn enable_openapi(mut self, enable: bool) -> Self {
        self.config.enable_openapi = enable;
        self
    }

    /// Persist the online notepad to a JSON file
    #[must_use]
    pub fn notepad_path(mut self, path: PathBuf) -> Self {
        self.config.notepad_path = Some(path);
        self
    }

    #[must_use]
    pub fn ipify_url(mut self, url: impl Into<String>) -> Self {
        self.config.ipify_url = url.into();
        self
    }

    #[must_use]
    pub fn rdap_url(mut self, url: impl Into<String>) -> Self {
        self.config.rdap_url = url.into();
        self
    }

    /// Set the outbound request timeout in seconds
    #[must_use]
    pub fn network_timeout_secs(mut self, timeout: u64) -> Self {
        self.config.network_timeout_secs = timeout;
        self
    }

    /// Check every setting against its allowed range and return the config
    ///
    /// # Errors
    ///
    /// `ConfigError::ValidationError` names the first setting out of range.
    pub fn build(self) -> Result<HttpRuntimeConfig, ConfigError> {
        self.validate()?;
        Ok(self.config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let config = &self.config;

        check_range(
            "request_timeout_secs",
            config.request_timeout_secs,
            MAX_REQUEST_TIMEOUT_SECS,
            "300 (5 minutes)",
        )?;
        check_range("max_body_size", config.max_body_size as u64, MAX_BODY_SIZE as u64, "64MB")?;
        check_range(
            "network_timeout_secs",
            config.network_timeout_secs,
            MAX_NETWORK_TIMEOUT_SECS,
            "120",
        )?;

        for (name, url) in [("ipify_url", &config.ipify_url), ("rdap_url", &config.rdap_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        match &config.notepad_path {
            Some(path) if path.as_os_str().is_empty() => Err(ConfigError::ValidationError(
                "notepad_path cannot be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// `value` must lie in `1..=max`.
fn check_range(name: &str, value: u64, max: u64, max_label: &str) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::ValidationError(format!("{name} must be greater than 0")))
    } else if value > max {
        Err(ConfigError::ValidationError(format!("{name} must be <= {max_label}")))
    } else {
        Ok(())
    }
}

fn get_env_string(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn get_env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(key) {
        Err(_) => Ok(None),
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("'{val}' is not a boolean (use true/false, 1/0, yes/no or on/off)"),
            }),
        },
    }
}

fn get_env_parsed<T>(key: &str, kind: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("invalid {kind} value '{val}': {e}"),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_pass_validation() {
        let config = HttpRuntimeConfigBuilder::new().build().unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_body_size, 8 * 1024 * 1024);
        assert_eq!(config.network_timeout_secs, 10);
        assert!(config.enable_cors && config.enable_openapi);
        assert!(config.notepad_path.is_none());
    }

    #[rstest]
    #[case::timeout_zero(HttpRuntimeConfigBuilder::new().request_timeout_secs(0), "request_timeout_secs must be greater than 0")]
    #[case::timeout_too_long(HttpRuntimeConfigBuilder::new().request_timeout_secs(301), "request_timeout_secs must be <= 300")]
    #[case::empty_body_limit(HttpRuntimeConfigBuilder::new().max_body_size(0), "max_body_size must be greater than 0")]
    #[case::huge_body_limit(HttpRuntimeConfigBuilder::new().max_body_size(MAX_BODY_SIZE + 1), "max_body_size must be <= 64MB")]
    #[case::network_timeout_zero(HttpRuntimeConfigBuilder::new().network_timeout_secs(0), "network_timeout_secs must be greater than 0")]
    #[case::network_timeout_too_long(HttpRuntimeConfigBuilder::new().network_timeout_secs(121), "network_timeout_secs must be <= 120")]
    #[case::ftp_rdap(HttpRuntimeConfigBuilder::new().rdap_url("ftp://rdap.example"), "rdap_url must be an http(s) URL")]
    #[case::bare_ipify(HttpRuntimeConfigBuilder::new().ipify_url("api.ipify.org"), "ipify_url must be an http(s) URL")]
    #[case::empty_notepad(HttpRuntimeConfigBuilder::new().notepad_path(PathBuf::new()), "notepad_path cannot be empty")]
    fn rejects_out_of_range(#[case] builder: HttpRuntimeConfigBuilder, #[case] expected: &str) {
        match builder.build() {
            Err(ConfigError::ValidationError(message)) => {
                assert!(message.contains(expected), "{message}")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let config = HttpRuntimeConfigBuilder::new()
            .request_timeout_secs(300)
            .max_body_size(MAX_BODY_SIZE)
            .network_timeout_secs(1)
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn unset_variables_are_none() {
        assert_eq!(get_env_bool("TOOLBOX_UNSET_FOR_TESTS").unwrap(), None);
        assert!(
            get_env_parsed::<u64>("TOOLBOX_UNSET_FOR_TESTS", "u64")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn setters_reach_the_config() {
        let config = HttpRuntimeConfigBuilder::new()
            .bind_addr("0.0.0.0:8080".parse().unwrap())
            .enable_cors(false)
            .enable_openapi(false)
            .notepad_path(PathBuf::from("/tmp/notepad.json"))
            .ipify_url("http://127.0.0.1:9000")
            .build()
            .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.enable_cors);
        assert!(!config.enable_openapi);
        assert_eq!(
            config.notepad_path.as_deref(),
            Some(std::path::Path::new("/tmp/notepad.json"))
        );
        assert_eq!(config.ipify_url, "http://127.0.0.1:9000");
    }
}
