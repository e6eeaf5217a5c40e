//! HTML `<head>` meta tags for search engines and social previews.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};
use url::Url;

use crate::core::{ToolConfig, invalid_input};

pub const MAX_TITLE_CHARS: usize = 70;
pub const MAX_DESCRIPTION_CHARS: usize = 160;

fn default_charset() -> String {
    "UTF-8".to_string()
}

fn default_viewport() -> String {
    "width=device-width, initial-scale=1.0".to_string()
}

fn default_twitter_card() -> String {
    "summary_large_image".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetaTagConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default = "default_charset")]
    pub charset: String,
    #[serde(default = "default_viewport")]
    pub viewport: String,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub og_url: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default = "default_twitter_card")]
    pub twitter_card: String,
    #[serde(default)]
    pub twitter_site: Option<String>,
    #[serde(default)]
    pub twitter_creator: Option<String>,
}

impl ToolConfig for MetaTagConfig {
    fn from_simple(_: String) -> Option<Self> {
        None
    }
}

/// Treat blank optional fields as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(format!("{} is required", field));
    }
    if len > max {
        return Err(format!("{} must be at most {} characters", field, max));
    }
    Ok(())
}

fn check_url(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) => Url::parse(v)
            .map(|_| ())
            .map_err(|_| format!("{} must be a valid URL", field)),
        None => Ok(()),
    }
}

/// Render the tag block. Every interpolated value is HTML-escaped.
pub fn generate_meta_tags(config: &MetaTagConfig) -> Result<String, String> {
    check_length("Title", &config.title, MAX_TITLE_CHARS)?;
    check_length("Description", &config.description, MAX_DESCRIPTION_CHARS)?;
    check_url("Open Graph URL", present(&config.og_url))?;
    check_url("Open Graph image", present(&config.og_image))?;

    let attr = |v: &str| encode_double_quoted_attribute(v).into_owned();
    let title = config.title.trim();
    let description = config.description.trim();
    let og_title = present(&config.og_title).unwrap_or(title);
    let og_description = present(&config.og_description).unwrap_or(description);

    let mut tags = String::new();
    // writing to a String cannot fail
    let mut line = |tag: String| {
        let _ = writeln!(tags, "{}", tag);
    };

    line(format!(r#"<meta charset="{}">"#, attr(&config.charset)));
    line(format!(r#"<meta name="viewport" content="{}">"#, attr(&config.viewport)));
    line(format!("<title>{}</title>", encode_text(title)));
    line(format!(r#"<meta name="description" content="{}">"#, attr(description)));
    if let Some(keywords) = present(&config.keywords) {
        line(format!(r#"<meta name="keywords" content="{}">"#, attr(keywords)));
    }
    if let Some(author) = present(&config.author) {
        line(format!(r#"<meta name="author" content="{}">"#, attr(author)));
    }

    line(String::new());
    line("<!-- Open Graph / Facebook -->".to_string());
    line(r#"<meta property="og:type" content="website">"#.to_string());
    if let Some(url) = present(&config.og_url) {
        line(format!(r#"<meta property="og:url" content="{}">"#, attr(url)));
    }
    line(format!(r#"<meta property="og:title" content="{}">"#, attr(og_title)));
    line(format!(r#"<meta property="og:description" content="{}">"#, attr(og_description)));
    if let Some(image) = present(&config.og_image) {
        line(format!(r#"<meta property="og:image" content="{}">"#, attr(image)));
    }

    line(String::new());
    line("<!-- Twitter -->".to_string());
    line(format!(r#"<meta property="twitter:card" content="{}">"#, attr(&config.twitter_card)));
    if let Some(url) = present(&config.og_url) {
        line(format!(r#"<meta property="twitter:url" content="{}">"#, attr(url)));
    }
    line(format!(r#"<meta property="twitter:title" content="{}">"#, attr(og_title)));
    line(format!(r#"<meta property="twitter:description" content="{}">"#, attr(og_description)));
    if let Some(image) = present(&config.og_image) {
        line(format!(r#"<meta property="twitter:image" content="{}">"#, attr(image)));
    }
    if let Some(site) = present(&config.twitter_site) {
        line(format!(r#"<meta name="twitter:site" content="{}">"#, attr(site)));
    }
    if let Some(creator) = present(&config.twitter_creator) {
        line(format!(r#"<meta name="twitter:creator" content="{}">"#, attr(creator)));
    }

    Ok(tags.trim_end().to_string())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MetaTagGeneratorTool;

impl Tool for MetaTagGeneratorTool {
    fn name(&self) -> &str {
        "meta-tag-generator"
    }

    fn call(&self, input: String) -> ExecutionResult {
        MetaTagConfig::parse(input)
            .and_then(|config| {
                generate_meta_tags(&config)
                    .map(|tags| serde_json::json!({ "result": tags }))
                    .map_err(invalid_input)
            })
            .into()
    }
}
