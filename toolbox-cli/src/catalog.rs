//! `list`, `search` and `show`

use clap::ValueEnum;
use toolbox_core::{Category, ToolDescriptor};
use toolbox_http::{ToolDetail, ToolSummary};
use toolbox_tools::InMemoryToolRegistry;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Tools in registration order, restricted to `category` when given.
pub fn list<'a>(
    registry: &'a InMemoryToolRegistry,
    category: Option<&str>,
) -> Result<Vec<&'a ToolDescriptor>, CliError> {
    let category = category
        .map(|label| {
            Category::from_label(label).ok_or_else(|| CliError::UnknownCategory(label.to_string()))
        })
        .transpose()?;

    Ok(registry
        .descriptors()
        .filter(|d| category.is_none_or(|c| d.category == c))
        .collect())
}

pub fn render(tools: &[&ToolDescriptor], format: OutputFormat) -> Result<String, CliError> {
    let summaries: Vec<ToolSummary> = tools.iter().map(|d| ToolSummary::from(*d)).collect();
    match format {
        OutputFormat::Table => Ok(table(tools)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&summaries)?),
    }
}

fn table(tools: &[&ToolDescriptor]) -> String {
    if tools.is_empty() {
        return "No tools found.".to_string();
    }

    let slug_width = tools.iter().map(|d| d.slug.as_str().len()).max().unwrap_or(0).max(4);
    let name_width = tools.iter().map(|d| d.name.len()).max().unwrap_or(0).max(4);

    let mut out = format!(
        "{:<slug_width$}  {:<name_width$}  CATEGORY\n",
        "SLUG", "NAME"
    );
    for d in tools {
        out.push_str(&format!(
            "{:<slug_width$}  {:<name_width$}  {}\n",
            d.slug.as_str(),
            d.name,
            d.category
        ));
    }
    out.push_str(&format!("\n{} tool(s)", tools.len()));
    out
}

/// Descriptor, page metadata and input schema of one tool.
pub fn show(registry: &InMemoryToolRegistry, slug: &str) -> Result<String, CliError> {
    let (Some(descriptor), Some(tool)) = (registry.get_tool_by_slug(slug), registry.get_tool(slug))
    else {
        return Err(CliError::UnknownTool(slug.to_string()));
    };
    Ok(serde_json::to_string_pretty(&ToolDetail::new(
        descriptor,
        tool.as_ref(),
    ))?)
}
