//! XML pretty-printing.

use std::io::Cursor;

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XmlInput {
    pub xml: String,
}

impl ToolConfig for XmlInput {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self { xml: input })
    }
}

/// Re-indent a well-formed document with two spaces, adding a UTF-8
/// declaration when the input has none.
pub fn format_xml(input: &str) -> Result<String, String> {
    let invalid = |detail: String| format!("Invalid XML: {}", detail);

    let mut reader = Reader::from_str(input.trim());
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    let mut depth = 0usize;
    let mut roots = 0usize;
    let mut has_declaration = false;
    loop {
        let event = reader.read_event().map_err(|e| {
            invalid(format!(
                "{} at position {}",
                e,
                reader.error_position()
            ))
        })?;
        match &event {
            Event::Eof => break,
            Event::Decl(_) => has_declaration = true,
            Event::Start(_) | Event::Empty(_) => {
                if depth == 0 {
                    roots += 1;
                    if roots > 1 {
                        return Err(invalid("document has more than one root element".into()));
                    }
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(_) | Event::CData(_) if depth == 0 => {
                return Err(invalid("text outside the root element".into()));
            }
            _ => {}
        }
        writer
            .write_event(event)
            .map_err(|e| invalid(e.to_string()))?;
    }

    if depth != 0 {
        return Err(invalid("unclosed element at end of document".into()));
    }
    if roots == 0 {
        return Err(invalid("no root element".into()));
    }

    let body = String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| invalid(e.to_string()))?;
    Ok(if has_declaration {
        body
    } else {
        format!("{}\n{}", XML_DECLARATION, body)
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct XmlFormatterTool;

impl Tool for XmlFormatterTool {
    fn name(&self) -> &str {
        "xml-formatter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        XmlInput::parse(input)
            .and_then(|config| {
                if config.xml.trim().is_empty() {
                    return Err(invalid_input("Please enter XML to format"));
                }
                format_xml(&config.xml)
                    .map(|result| serde_json::json!({ "result": result }))
                    .map_err(invalid_input)
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_and_adds_declaration() {
        let out = format_xml("<root><a>1</a><b/></root>").unwrap();
        assert!(out.starts_with(XML_DECLARATION));
        assert!(out.contains("\n  <a>1</a>"));
        assert!(out.contains("\n  <b/>"));
        assert!(out.trim_end().ends_with("</root>"));
    }

    #[test]
    fn keeps_existing_declaration() {
        let out = format_xml(r#"<?xml version="1.0"?><r><c/></r>"#).unwrap();
        assert_eq!(out.matches("<?xml").count(), 1);
        assert!(out.starts_with(r#"<?xml version="1.0"?>"#));
    }

    #[test]
    fn rejects_malformed_documents() {
        for bad in ["<a><b></a>", "<a>", "<a/><b/>", "just text", "<a></b>"] {
            let err = format_xml(bad).unwrap_err();
            assert!(err.starts_with("Invalid XML: "), "{bad}: {err}");
        }
    }

    #[test]
    fn tool_output() {
        let out = XmlFormatterTool.call("<x><y>z</y></x>".into()).output_json().unwrap();
        assert!(out["result"].as_str().unwrap().contains("<y>z</y>"));
        assert!(XmlFormatterTool.call("  ".into()).is_failure());
    }
}
