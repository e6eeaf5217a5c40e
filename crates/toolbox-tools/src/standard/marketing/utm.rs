//! Campaign-tagged URLs.

use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};
use url::Url;

use crate::core::{ToolConfig, invalid_input};

#[derive(Debug, Clone, Deserialize)]
pub struct UtmConfig {
    pub url: String,
    pub source: String,
    pub medium: String,
    pub campaign: String,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ToolConfig for UtmConfig {
    fn from_simple(_: String) -> Option<Self> {
        None
    }
}

/// Set the `utm_*` parameters on `config.url`, replacing any already there
/// and keeping all other query parameters in order.
pub fn build_utm_url(config: &UtmConfig) -> Result<String, String> {
    let mut url = Url::parse(config.url.trim())
        .map_err(|_| "Please enter a valid website URL (e.g. https://example.com)".to_string())?;

    let required = [
        ("utm_source", "Campaign source", config.source.trim()),
        ("utm_medium", "Campaign medium", config.medium.trim()),
        ("utm_campaign", "Campaign name", config.campaign.trim()),
    ];
    for (_, label, value) in &required {
        if value.is_empty() {
            return Err(format!("{} is required", label));
        }
    }
    let optional = [
        ("utm_term", config.term.as_deref().map(str::trim)),
        ("utm_content", config.content.as_deref().map(str::trim)),
    ];

    let mut params: Vec<(&str, &str)> = required.iter().map(|(k, _, v)| (*k, *v)).collect();
    params.extend(
        optional
            .iter()
            .filter_map(|(k, v)| v.filter(|v| !v.is_empty()).map(|v| (*k, v))),
    );

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !params.iter().any(|(p, _)| p == k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .extend_pairs(params);
    Ok(url.to_string())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UtmLinkGeneratorTool;

impl Tool for UtmLinkGeneratorTool {
    fn name(&self) -> &str {
        "utm-link-generator"
    }

    fn call(&self, input: String) -> ExecutionResult {
        UtmConfig::parse(input)
            .and_then(|config| {
                build_utm_url(&config)
                    .map(|url| serde_json::json!({ "result": url }))
                    .map_err(invalid_input)
            })
            .into()
    }
}
