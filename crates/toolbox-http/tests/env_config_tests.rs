//! Integration tests for environment-based configuration

use serial_test::serial;
use std::env;
use toolbox_http::runtime::{ConfigError, HttpRuntimeConfigBuilder};

const ALL_VARS: &[&str] = &[
    "TOOLBOX_BIND_ADDR",
    "TOOLBOX_REQUEST_TIMEOUT_SECS",
    "TOOLBOX_MAX_BODY_SIZE",
    "TOOLBOX_ENABLE_CORS",
    "TOOLBOX_ENABLE_OPENAPI",
    "TOOLBOX_NOTEPAD_PATH",
    "TOOLBOX_IPIFY_URL",
    "TOOLBOX_RDAP_URL",
    "TOOLBOX_NETWORK_TIMEOUT_SECS",
];

fn set_env(key: &str, value: &str) {
    unsafe {
        env::set_var(key, value);
    }
}

fn clear_all_toolbox_env_vars() {
    for key in ALL_VARS {
        unsafe {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_env_config_default_when_no_vars_set() {
    clear_all_toolbox_env_vars();

    let config = HttpRuntimeConfigBuilder::from_env()
        .expect("should load defaults when no env vars set")
        .build()
        .expect("should build valid config");

    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.max_body_size, 8 * 1024 * 1024);
    assert!(config.enable_cors);
    assert!(config.enable_openapi);
    assert!(config.notepad_path.is_none());
    assert_eq!(config.ipify_url, "https://api.ipify.org");
    assert_eq!(config.rdap_url, "https://rdap.org");
    assert_eq!(config.network_timeout_secs, 10);
}

#[test]
#[serial]
fn test_env_config_http_settings() {
    clear_all_toolbox_env_vars();
    set_env("TOOLBOX_BIND_ADDR", "0.0.0.0:8080");
    set_env("TOOLBOX_REQUEST_TIMEOUT_SECS", "60");
    set_env("TOOLBOX_MAX_BODY_SIZE", "1048576");

    let config = HttpRuntimeConfigBuilder::from_env()
        .expect("should load config")
        .build()
        .expect("should build valid config");

    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.request_timeout_secs, 60);
    assert_eq!(config.max_body_size, 1024 * 1024);

    clear_all_toolbox_env_vars();
}

#[test]
#[serial]
fn test_env_config_boolean_spellings() {
    for (value, expected) in [
        ("true", true),
        ("1", true),
        ("YES", true),
        ("on", true),
        ("false", false),
        ("0", false),
        ("no", false),
        ("Off", false),
    ] {
        clear_all_toolbox_env_vars();
        set_env("TOOLBOX_ENABLE_CORS", value);

        let config = HttpRuntimeConfigBuilder::from_env()
            .expect("should load config")
            .build()
            .expect("should build valid config");
        assert_eq!(config.enable_cors, expected, "value {value}");
    }

    clear_all_toolbox_env_vars();
}

#[test]
#[serial]
fn test_env_config_tool_backends() {
    clear_all_toolbox_env_vars();
    set_env("TOOLBOX_NOTEPAD_PATH", "/var/lib/toolbox/notepad.json");
    set_env("TOOLBOX_IPIFY_URL", "http://127.0.0.1:9000");
    set_env("TOOLBOX_RDAP_URL", "http://127.0.0.1:9001");
    set_env("TOOLBOX_NETWORK_TIMEOUT_SECS", "5");

    let config = HttpRuntimeConfigBuilder::from_env()
        .expect("should load config")
        .build()
        .expect("should build valid config");

    assert_eq!(
        config.notepad_path.as_deref(),
        Some(std::path::Path::new("/var/lib/toolbox/notepad.json"))
    );
    assert_eq!(config.ipify_url, "http://127.0.0.1:9000");
    assert_eq!(config.rdap_url, "http://127.0.0.1:9001");
    assert_eq!(config.network_timeout_secs, 5);

    clear_all_toolbox_env_vars();
}

#[test]
#[serial]
fn test_env_config_invalid_bool() {
    clear_all_toolbox_env_vars();
    set_env("TOOLBOX_ENABLE_OPENAPI", "maybe");

    let err = HttpRuntimeConfigBuilder::from_env().unwrap_err();
    match err {
        ConfigError::InvalidEnvVar { key, message } => {
            assert_eq!(key, "TOOLBOX_ENABLE_OPENAPI");
            assert!(message.contains("maybe"));
        }
        other => panic!("unexpected error: {other}"),
    }

    clear_all_toolbox_env_vars();
}

#[test]
#[serial]
fn test_env_config_invalid_number_and_addr() {
    clear_all_toolbox_env_vars();
    set_env("TOOLBOX_REQUEST_TIMEOUT_SECS", "soon");
    assert!(matches!(
        HttpRuntimeConfigBuilder::from_env(),
        Err(ConfigError::InvalidEnvVar { .. })
    ));

    clear_all_toolbox_env_vars();
    set_env("TOOLBOX_BIND_ADDR", "localhost");
    assert!(matches!(
        HttpRuntimeConfigBuilder::from_env(),
        Err(ConfigError::InvalidEnvVar { .. })
    ));

    clear_all_toolbox_env_vars();
}

#[test]
#[serial]
fn test_env_config_out_of_range_fails_validation() {
    clear_all_toolbox_env_vars();
    set_env("TOOLBOX_NETWORK_TIMEOUT_SECS", "0");

    let result = HttpRuntimeConfigBuilder::from_env()
        .expect("parses")
        .build();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));

    clear_all_toolbox_env_vars();
    set_env("TOOLBOX_MAX_BODY_SIZE", "134217728");
    let result = HttpRuntimeConfigBuilder::from_env()
        .expect("parses")
        .build();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));

    clear_all_toolbox_env_vars();
}
