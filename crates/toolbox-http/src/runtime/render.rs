//! Server-rendered HTML pages.
//!
//! Every interpolated value goes through `html-escape`; descriptors are
//! static but tool input and output are user-controlled.

use std::collections::BTreeMap;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use toolbox_core::{Category, ExecutionResult, SITE_NAME, Tool, ToolDescriptor};

const HOME_TITLE: &str = "Toolbox Online - Your Ultimate Collection of Online Tools";
const HOME_DESCRIPTION: &str = "Explore a vast collection of free online tools designed to \
simplify your tasks. From converters and calculators to generators and formatters, Toolbox \
Online has you covered.";

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:64rem;margin:0 auto;padding:1rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(14rem,1fr));gap:1rem}\
.card{border:1px solid #ddd;border-radius:.5rem;padding:1rem}\
.output{background:#f6f6f6;padding:1rem;overflow:auto}\
.error{color:#b00020}";

struct Head<'a> {
    title: &'a str,
    description: &'a str,
    keywords: Option<String>,
    canonical: Option<String>,
}

fn layout(head: Head<'_>, body: &str) -> String {
    let mut meta = format!(
        "<meta name=\"description\" content=\"{desc}\">\
<meta property=\"og:title\" content=\"{title}\">\
<meta property=\"og:description\" content=\"{desc}\">\
<meta property=\"og:site_name\" content=\"{site}\">\
<meta property=\"og:type\" content=\"website\">\
<meta name=\"twitter:card\" content=\"summary_large_image\">",
        title = attr(head.title),
        desc = attr(head.description),
        site = SITE_NAME,
    );
    if let Some(keywords) = head.keywords {
        meta.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\">",
            attr(&keywords)
        ));
    }
    if let Some(canonical) = head.canonical {
        meta.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">",
            attr(&canonical)
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n{meta}\n<style>{STYLE}</style>\n</head>\n<body>\n\
<header><a href=\"/\">{site}</a>\
<form action=\"/\" method=\"get\" role=\"search\">\
<input type=\"search\" name=\"q\" placeholder=\"Search tools\"></form></header>\n\
<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = text(head.title),
        site = SITE_NAME,
    )
}

fn tool_card(descriptor: &ToolDescriptor) -> String {
    format!(
        "<a class=\"card\" href=\"/tools/{slug}\" data-icon=\"{icon}\"><h3>{name}</h3><p>{desc}</p></a>",
        slug = attr(descriptor.slug.as_str()),
        icon = attr(descriptor.icon),
        name = text(descriptor.name),
        desc = text(descriptor.description),
    )
}

/// Home page: one section per category, categories in label order.
///
/// `query` is echoed in the heading when the listing was filtered.
pub fn home_page(
    groups: &BTreeMap<Category, Vec<&ToolDescriptor>>,
    query: Option<&str>,
) -> String {
    let mut body = format!(
        "<section class=\"hero\"><h1>Welcome to {SITE_NAME}</h1>\
<p>Your one-stop destination for a comprehensive suite of free online tools. \
Boost your productivity with our versatile collection.</p></section>\n"
    );

    if let Some(q) = query {
        body.push_str(&format!(
            "<p class=\"search-summary\">Results for &quot;{}&quot;</p>\n",
            text(q)
        ));
    }

    if groups.is_empty() {
        body.push_str("<p class=\"empty\">No tools match your search.</p>\n");
    }

    for (category, tools) in groups {
        body.push_str(&format!(
            "<section><h2>{}</h2><div class=\"grid\">",
            text(category.label())
        ));
        for descriptor in tools {
            body.push_str(&tool_card(descriptor));
        }
        body.push_str("</div></section>\n");
    }

    layout(
        Head {
            title: HOME_TITLE,
            description: HOME_DESCRIPTION,
            keywords: None,
            canonical: Some("/".to_string()),
        },
        &body,
    )
}

fn render_result(result: &ExecutionResult) -> String {
    match result.failure_reason() {
        Some(reason) => format!(
            "<div class=\"error\" role=\"alert\">{}</div>",
            text(&reason.message())
        ),
        None => {
            let output = result.output();
            let shown = serde_json::from_str::<serde_json::Value>(&output)
                .ok()
                .and_then(|v| serde_json::to_string_pretty(&v).ok())
                .unwrap_or(output);
            format!("<pre class=\"output\">{}</pre>", text(&shown))
        }
    }
}

/// Tool page with the run form, and the result when `run` is present.
pub fn tool_page(
    descriptor: &ToolDescriptor,
    tool: &dyn Tool,
    run: Option<(&str, &ExecutionResult)>,
) -> String {
    let slug = descriptor.slug.as_str();
    let mut body = format!(
        "<article class=\"tool\" data-icon=\"{icon}\"><h1>{name}</h1>",
        icon = attr(descriptor.icon),
        name = text(descriptor.name),
    );
    if let Some(long) = descriptor.long_description {
        body.push_str(&format!("<p class=\"lead\">{}</p>", text(long)));
    }

    let previous = run.map(|(input, _)| input).unwrap_or_default();
    body.push_str(&format!(
        "<form action=\"/tools/{slug}\" method=\"get\">\
<textarea name=\"input\" rows=\"8\" cols=\"60\">{input}</textarea>\
<button type=\"submit\">Run</button></form>",
        slug = attr(slug),
        input = text(previous),
    ));

    if let Some(schema) = tool
        .input_schema()
        .and_then(|s| serde_json::to_string_pretty(&s).ok())
    {
        body.push_str(&format!(
            "<details><summary>Options</summary><pre>{}</pre></details>",
            text(&schema)
        ));
    }

    if let Some((_, result)) = run {
        body.push_str(&render_result(result));
    }
    body.push_str("</article>");

    layout(
        Head {
            title: &descriptor.page_title(),
            description: descriptor.page_description(),
            keywords: Some(descriptor.keywords.join(", ")),
            canonical: Some(format!("/tools/{slug}")),
        },
        &body,
    )
}

/// Page served with a 404 for unknown slugs.
pub fn not_found_page(slug: &str) -> String {
    let body = format!(
        "<h1>Tool Not Found</h1><p>There is no tool called &quot;{}&quot;. \
<a href=\"/\">Browse all tools</a>.</p>",
        text(slug)
    );
    layout(
        Head {
            title: "Tool Not Found",
            description: "The requested tool does not exist.",
            keywords: None,
            canonical: None,
        },
        &body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbox_core::ToolSlug;

    struct EchoTool;

    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn call(&self, input: String) -> ExecutionResult {
            ExecutionResult::success(input)
        }
    }

    fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            slug: ToolSlug::new_unchecked("echo"),
            name: "Echo",
            description: "Repeats text",
            long_description: Some("Repeats whatever you type."),
            keywords: &["repeat", "echo"],
            category: Category::TextUtilities,
            icon: "Repeat",
        }
    }

    #[test]
    fn tool_page_metadata() {
        let html = tool_page(&descriptor(), &EchoTool, None);
        assert!(html.contains("<title>Echo - Toolbox Online</title>"));
        assert!(html.contains("content=\"Repeats whatever you type.\""));
        assert!(html.contains("content=\"repeat, echo\""));
        assert!(html.contains("href=\"/tools/echo\""));
    }

    #[test]
    fn user_input_is_escaped() {
        let input = "<script>alert(1)</script>";
        let result = EchoTool.call(input.to_string());
        let html = tool_page(&descriptor(), &EchoTool, Some((input, &result)));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn failures_render_as_alert() {
        let result = ExecutionResult::invalid_input("Enter a number");
        let html = tool_page(&descriptor(), &EchoTool, Some(("x", &result)));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Invalid input: Enter a number"));
    }

    #[test]
    fn not_found_page_title() {
        let html = not_found_page("<nope>");
        assert!(html.contains("<title>Tool Not Found</title>"));
        assert!(html.contains("&lt;nope&gt;"));
    }

    #[test]
    fn home_page_lists_categories() {
        let d = descriptor();
        let mut groups = BTreeMap::new();
        groups.insert(Category::TextUtilities, vec![&d]);
        let html = home_page(&groups, Some("ech"));
        assert!(html.contains("<h2>Text Utilities</h2>"));
        assert!(html.contains("Results for &quot;ech&quot;"));
        assert!(html.contains("<title>Toolbox Online - Your Ultimate Collection of Online Tools</title>"));
    }
}
