//! Images as base64 data URIs.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

/// Largest decoded image accepted (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

static DATA_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^data:(image/(?:gif|png|jpeg|bmp|webp|svg\+xml))(?:;charset=utf-8)?;base64,([A-Za-z0-9+/]+={0,2})$",
    )
    .expect("valid regex")
});

/// Guess an image MIME type from its leading bytes.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'B', b'M', ..] => Some("image/bmp"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => None,
    }
}

fn extension_for(mime: &str) -> &str {
    let subtype = mime.split_once('/').map_or("png", |(_, sub)| sub);
    if subtype == "svg+xml" { "svg" } else { subtype }
}

/// Wrap raw image bytes in a data URI.
pub fn image_to_data_uri(bytes: &[u8], mime: Option<&str>) -> Result<String, String> {
    if bytes.is_empty() {
        return Err("Please provide an image".to_string());
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err("File is too large. Maximum size is 5MB.".to_string());
    }
    let mime = match mime.map(str::trim).filter(|m| !m.is_empty()) {
        Some(m) if m.starts_with("image/") => m.to_string(),
        Some(m) => return Err(format!("Not an image type: {}", m)),
        None => sniff_image_mime(bytes)
            .ok_or_else(|| "Could not detect the image type".to_string())?
            .to_string(),
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// A decoded image data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub extension: String,
    pub bytes: Vec<u8>,
    pub data_uri: String,
}

/// Validate a data URI, or bare base64 taken as PNG, and decode it.
pub fn decode_image_data_uri(input: &str) -> Result<DecodedImage, String> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err("Please paste a Base64 image string".to_string());
    }
    let data_uri = if compact.starts_with("data:image/") {
        compact
    } else {
        format!("data:image/png;base64,{}", compact)
    };
    let caps = DATA_URI.captures(&data_uri).ok_or_else(|| {
        "Invalid Base64 Data URI format. It should start with \"data:image/(type);base64,...\""
            .to_string()
    })?;
    let mime_type = caps[1].to_string();
    let bytes = STANDARD
        .decode(&caps[2])
        .map_err(|e| format!("Invalid Base64 data: {}", e))?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err("Image is too large. Maximum size is 5MB.".to_string());
    }
    Ok(DecodedImage {
        extension: extension_for(&mime_type).to_string(),
        mime_type,
        bytes,
        data_uri,
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageUpload {
    /// Base64 of the raw file
    pub data: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl ToolConfig for ImageUpload {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self {
            data: input,
            mime_type: None,
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageToBase64Tool;

impl Tool for ImageToBase64Tool {
    fn name(&self) -> &str {
        "image-to-base64"
    }

    fn call(&self, input: String) -> ExecutionResult {
        ImageUpload::parse(input)
            .and_then(|upload| {
                let compact: String = upload.data.chars().filter(|c| !c.is_whitespace()).collect();
                let bytes = STANDARD
                    .decode(compact)
                    .map_err(|e| invalid_input(format!("Invalid Base64 data: {}", e)))?;
                let uri = image_to_data_uri(&bytes, upload.mime_type.as_deref())
                    .map_err(invalid_input)?;
                Ok(serde_json::json!({ "bytes": bytes.len(), "data_uri": uri }))
            })
            .into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataUriInput {
    pub data_uri: String,
}

impl ToolConfig for DataUriInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self { data_uri: input })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Base64ToImageTool;

impl Tool for Base64ToImageTool {
    fn name(&self) -> &str {
        "base64-to-image"
    }

    fn call(&self, input: String) -> ExecutionResult {
        DataUriInput::parse(input)
            .and_then(|config| {
                decode_image_data_uri(&config.data_uri)
                    .map(|image| {
                        serde_json::json!({
                            "mime_type": image.mime_type,
                            "extension": image.extension,
                            "bytes": image.bytes.len(),
                            "data_uri": image.data_uri,
                        })
                    })
                    .map_err(invalid_input)
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(sniff_image_mime(PNG_HEADER), Some("image/png"));
        assert_eq!(sniff_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(sniff_image_mime(b"GIF89a"), Some("image/gif"));
        assert_eq!(sniff_image_mime(b"RIFF\0\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_image_mime(b"hello"), None);
    }

    #[test]
    fn encodes_with_explicit_or_sniffed_type() {
        let uri = image_to_data_uri(PNG_HEADER, None).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        let uri = image_to_data_uri(b"<svg/>", Some("image/svg+xml")).unwrap();
        assert_eq!(uri, "data:image/svg+xml;base64,PHN2Zy8+");

        assert!(image_to_data_uri(b"text", Some("text/plain")).is_err());
        assert!(image_to_data_uri(b"text", None).is_err());
        assert!(image_to_data_uri(&vec![0u8; MAX_IMAGE_BYTES + 1], Some("image/png")).is_err());
    }

    #[test]
    fn decodes_data_uris() {
        let image = decode_image_data_uri("data:image/svg+xml;base64,PHN2Zy8+").unwrap();
        assert_eq!(image.mime_type, "image/svg+xml");
        assert_eq!(image.extension, "svg");
        assert_eq!(image.bytes, b"<svg/>");

        let image = decode_image_data_uri("iVBORw0KGgo=").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.extension, "png");
        assert_eq!(image.bytes, PNG_HEADER);
    }

    #[test]
    fn rejects_bad_payloads() {
        assert!(decode_image_data_uri("data:image/tiff;base64,AAAA").is_err());
        assert!(decode_image_data_uri("data:image/png;base64,@@@").is_err());
        assert!(decode_image_data_uri("data:image/png;base64,AAA").is_err());
        assert!(decode_image_data_uri("  ").is_err());
    }

    #[test]
    fn tools_round_trip() {
        let out = ImageToBase64Tool
            .call(r#"{"data":"iVBORw0KGgo="}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["bytes"], 8);
        let uri = out["data_uri"].as_str().unwrap().to_string();
        let back = Base64ToImageTool.call(uri).output_json().unwrap();
        assert_eq!(back["extension"], "png");
    }
}
