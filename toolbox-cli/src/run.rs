//! `run`

use std::io::Read;

use toolbox_core::ToolCall;
use toolbox_tools::{InMemoryToolRegistry, ToolRegistry};

use crate::error::CliError;

/// Read tool input from `reader`, dropping one trailing line break so piped
/// `echo` output behaves like an argument.
pub fn read_input(mut reader: impl Read) -> Result<String, CliError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

/// Run one tool and return its output, pretty-printed when it is JSON.
pub fn run(registry: &InMemoryToolRegistry, slug: &str, input: String) -> Result<String, CliError> {
    let call = ToolCall::new(slug, &input).map_err(|_| CliError::UnknownTool(slug.to_string()))?;
    let result = registry
        .try_dispatch(&call)
        .map_err(|_| CliError::UnknownTool(slug.to_string()))?;

    let output = result.into_result().map_err(CliError::ToolFailed)?;
    Ok(match serde_json::from_str::<serde_json::Value>(&output) {
        Ok(value) => serde_json::to_string_pretty(&value)?,
        Err(_) => output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use toolbox_http::HttpRuntimeConfig;
    use toolbox_tools::{StandardToolsConfig, standard_registry};

    fn registry() -> InMemoryToolRegistry {
        standard_registry(StandardToolsConfig::default()).unwrap()
    }

    #[rstest]
    #[case("hello\n", "hello")]
    #[case("hello\r\n", "hello")]
    #[case("two\nlines\n\n", "two\nlines\n")]
    #[case("", "")]
    fn stdin_trailing_newline(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(read_input(raw.as_bytes()).unwrap(), expected);
    }

    #[test]
    fn run_prints_pretty_json() {
        let out = run(&registry(), "temperature-converter", "0".into()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["fahrenheit"], 32.0);
        assert!(out.contains('\n'));
    }

    #[test]
    fn run_reports_tool_failure() {
        let err = run(&registry(), "temperature-converter", "cold".into()).unwrap_err();
        assert!(matches!(err, CliError::ToolFailed(_)));
        assert!(err.to_string().starts_with("Invalid input"));
    }

    #[rstest]
    #[case("not-a-tool")]
    #[case("Not A Slug")]
    fn run_rejects_unknown_tool(#[case] slug: &str) {
        let err = run(&registry(), slug, String::new()).unwrap_err();
        assert!(matches!(err, CliError::UnknownTool(_)));
    }

    #[test]
    fn notepad_survives_between_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let config = HttpRuntimeConfig {
            notepad_path: Some(dir.path().join("notepad.json")),
            ..Default::default()
        };

        let first = standard_registry(config.tools_config()).unwrap();
        run(&first, "online-notepad", r#"{"action":"save","content":"draft"}"#.into()).unwrap();

        let second = standard_registry(config.tools_config()).unwrap();
        let out = run(&second, "online-notepad", "load".into()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["content"], "draft");
    }
}
