//! Request and response bodies of the JSON API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use toolbox_core::{Tool, ToolDescriptor};
use utoipa::{IntoParams, ToSchema};

/// Catalog entry as listed by `GET /api/tools`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToolSummary {
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Category display label
    pub category: String,
    pub icon: String,
    /// Path of the tool page
    pub url: String,
}

impl From<&ToolDescriptor> for ToolSummary {
    fn from(descriptor: &ToolDescriptor) -> Self {
        Self {
            slug: descriptor.slug.to_string(),
            name: descriptor.name.to_string(),
            description: descriptor.description.to_string(),
            category: descriptor.category.label().to_string(),
            icon: descriptor.icon.to_string(),
            url: format!("/tools/{}", descriptor.slug),
        }
    }
}

/// Full descriptor returned by `GET /api/tools/{slug}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToolDetail {
    #[serde(flatten)]
    pub summary: ToolSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub keywords: Vec<String>,
    pub page_title: String,
    pub page_description: String,
    /// JSON Schema of the options object, for tools that take one
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub input_schema: Option<Value>,
}

impl ToolDetail {
    pub fn new(descriptor: &ToolDescriptor, tool: &dyn Tool) -> Self {
        Self {
            summary: ToolSummary::from(descriptor),
            long_description: descriptor.long_description.map(str::to_string),
            keywords: descriptor.keywords.iter().map(|k| k.to_string()).collect(),
            page_title: descriptor.page_title(),
            page_description: descriptor.page_description().to_string(),
            input_schema: tool.input_schema(),
        }
    }
}

/// Category with the slugs listed under it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySummary {
    pub name: String,
    pub tool_count: usize,
    pub tools: Vec<String>,
}

/// Filters accepted by `GET /api/tools`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ToolListQuery {
    /// Case-insensitive search over names, descriptions and keywords
    pub q: Option<String>,
    /// Category display label, e.g. `Text Utilities`
    pub category: Option<String>,
}

/// Body of `POST /api/tools/{slug}/run`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RunToolRequest {
    /// Plain text, or an options object for tools that take one
    #[serde(default)]
    #[schema(value_type = Object)]
    pub input: Value,
}

impl RunToolRequest {
    /// The string handed to [`Tool::call`].
    pub fn into_tool_input(self) -> String {
        match self.input {
            Value::Null => String::new(),
            Value::String(text) => text,
            other => other.to_string(),
        }
    }
}

/// Successful tool run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RunToolResponse {
    pub tool: String,
    /// The tool's JSON output, or a string for tools with plain output
    #[schema(value_type = Object)]
    pub output: Value,
}

impl RunToolResponse {
    pub fn new(tool: impl Into<String>, output: String) -> Self {
        let output = serde_json::from_str(&output).unwrap_or(Value::String(output));
        Self {
            tool: tool.into(),
            output,
        }
    }
}
