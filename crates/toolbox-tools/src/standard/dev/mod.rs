//! # Developer Tools
//!
//! Base64, JSON and XML formatting, and HTML/CSS/JavaScript minification.

pub mod encoding;
pub mod json;
pub mod minify;
pub mod xml;

pub use encoding::{Base64DecoderTool, Base64EncoderTool, decode_base64, encode_base64};
pub use json::{JsonFormatterTool, JsonMode, format_json};
pub use minify::{
    CssMinifierTool, HtmlMinifierTool, JsMinifierTool, minify_css, minify_html, minify_js,
};
pub use xml::{XmlFormatterTool, format_xml};
