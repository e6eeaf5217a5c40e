//! JSON beautifier and minifier.

use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonMode {
    #[default]
    Beautify,
    Minify,
}

/// `{"json": "...", "mode": "minify"}`, or the document itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonFormatConfig {
    pub json: String,
    #[serde(default)]
    pub mode: JsonMode,
}

impl ToolConfig for JsonFormatConfig {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self {
            json: input,
            mode: JsonMode::default(),
        })
    }
}

/// Re-serialize a JSON document, keeping key order.
pub fn format_json(input: &str, mode: JsonMode) -> Result<String, String> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| format!("Invalid JSON: {}", e))?;
    let formatted = match mode {
        JsonMode::Beautify => serde_json::to_string_pretty(&value),
        JsonMode::Minify => serde_json::to_string(&value),
    };
    formatted.map_err(|e| format!("Invalid JSON: {}", e))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatterTool;

impl Tool for JsonFormatterTool {
    fn name(&self) -> &str {
        "json-formatter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        JsonFormatConfig::parse(input)
            .and_then(|config| {
                format_json(&config.json, config.mode)
                    .map(|result| serde_json::json!({ "result": result }))
                    .map_err(invalid_input)
            })
            .into()
    }
}
