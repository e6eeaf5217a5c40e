//! Regex-based HTML, CSS and JavaScript minifiers.
//!
//! These are whitespace and comment strippers, not parsers: string literals
//! containing `//` or `/*` are not protected.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input, round_to};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

static HTML_COMMENT: Lazy<Regex> = Lazy::new(|| regex(r"(?s)<!--.*?-->"));
static BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| regex(r">\s+<"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| regex(r"\s+"));

static CSS_COMMENT: Lazy<Regex> = Lazy::new(|| regex(r"(?s)/\*.*?\*/|//.*"));
static CSS_PUNCTUATION: Lazy<Regex> = Lazy::new(|| regex(r"\s*([{};:,])\s*"));

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| regex(r"//.*"));
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| regex(r"(?s)/\*.*?\*/"));
static SPACES: Lazy<Regex> = Lazy::new(|| regex(r"[ \t]+"));
static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| regex(r"\s*\n\s*"));
static NEWLINES_AROUND_PUNCTUATION: Lazy<Regex> = Lazy::new(|| regex(r"\n\s*([{};,])\s*\n"));
static SEMICOLON_NEWLINE: Lazy<Regex> = Lazy::new(|| regex(r";\s*\n"));

pub fn minify_html(html: &str) -> String {
    let out = HTML_COMMENT.replace_all(html, "");
    let out = BETWEEN_TAGS.replace_all(&out, "><");
    let out = WHITESPACE.replace_all(&out, " ");
    out.trim().to_string()
}

pub fn minify_css(css: &str) -> String {
    let out = CSS_COMMENT.replace_all(css, "");
    let joined: String = out.lines().map(str::trim).collect();
    let out = WHITESPACE.replace_all(&joined, " ");
    let out = CSS_PUNCTUATION.replace_all(&out, "$1");
    out.replace(";}", "}").trim().to_string()
}

pub fn minify_js(js: &str) -> String {
    let out = LINE_COMMENT.replace_all(js, "");
    let out = BLOCK_COMMENT.replace_all(&out, "");
    let trimmed = out.lines().map(str::trim).collect::<Vec<_>>().join("\n");
    let out = SPACES.replace_all(&trimmed, " ");
    let out = NEWLINE_RUNS.replace_all(&out, "\n");
    let out = NEWLINES_AROUND_PUNCTUATION.replace_all(&out, "$1");
    let out = SEMICOLON_NEWLINE.replace_all(&out, ";");
    out.trim().to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeInput {
    pub code: String,
}

impl ToolConfig for CodeInput {
    /// Source code may itself start with `{`.
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self { code: input })
    }
}

fn run_minifier(input: String, minify: fn(&str) -> String, what: &str) -> ExecutionResult {
    CodeInput::parse(input)
        .and_then(|config| {
            if config.code.trim().is_empty() {
                return Err(invalid_input(format!("Please enter {} to minify", what)));
            }
            let minified = minify(&config.code);
            let original_size = config.code.len();
            let minified_size = minified.len();
            let savings = (original_size - minified_size.min(original_size)) as f64
                / original_size as f64
                * 100.0;
            Ok(serde_json::json!({
                "result": minified,
                "original_size": original_size,
                "minified_size": minified_size,
                "savings_percent": round_to(savings, 2),
            }))
        })
        .into()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlMinifierTool;

impl Tool for HtmlMinifierTool {
    fn name(&self) -> &str {
        "html-minifier"
    }

    fn call(&self, input: String) -> ExecutionResult {
        run_minifier(input, minify_html, "HTML")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CssMinifierTool;

impl Tool for CssMinifierTool {
    fn name(&self) -> &str {
        "css-minifier"
    }

    fn call(&self, input: String) -> ExecutionResult {
        run_minifier(input, minify_css, "CSS")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsMinifierTool;

impl Tool for JsMinifierTool {
    fn name(&self) -> &str {
        "javascript-minifier"
    }

    fn call(&self, input: String) -> ExecutionResult {
        run_minifier(input, minify_js, "JavaScript")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html() {
        let html = "<div>\n  <!-- note -->\n  <p>Hello   world</p>\n</div>\n";
        assert_eq!(minify_html(html), "<div><p>Hello world</p></div>");
    }

    #[test]
    fn css() {
        let css = "/* header */\nbody {\n  margin: 0;\n  color: red;\n}\n\na , b { top : 1px; }";
        assert_eq!(minify_css(css), "body{margin:0;color:red}a,b{top:1px}");
    }

    #[test]
    fn javascript() {
        let js = "// setup\nfunction add(a, b) {\n    /* sum */\n    return a + b;\n}\n\n\nconst x = add(1,\t 2);\n";
        assert_eq!(
            minify_js(js),
            "function add(a, b) {\nreturn a + b;}const x = add(1, 2);"
        );
    }

    #[test]
    fn reports_sizes() {
        let out = CssMinifierTool
            .call("a {  color: red;  }".into())
            .output_json()
            .unwrap();
        assert_eq!(out["result"], "a{color:red}");
        assert_eq!(out["minified_size"], 12);
        assert!(HtmlMinifierTool.call("   ".into()).is_failure());
    }

    #[test]
    fn javascript_object_literal_is_code() {
        let out = JsMinifierTool
            .call("{ a: 1 }".into())
            .output_json()
            .unwrap();
        assert_eq!(out["result"], "{ a: 1 }");
    }
}
