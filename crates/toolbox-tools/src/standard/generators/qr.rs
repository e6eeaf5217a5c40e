//! QR code generation rendered to SVG.

use std::fmt::Write as _;

use once_cell::sync::Lazy;
use qrcode::{Color, EcLevel, QrCode};
use regex::Regex;
use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

pub const MIN_QR_SIZE: u32 = 50;
pub const MAX_QR_SIZE: u32 = 1000;
pub const MAX_QR_MARGIN: u32 = 100;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ErrorCorrection {
    L,
    M,
    #[default]
    Q,
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

fn default_size() -> u32 {
    300
}

fn default_margin() -> u32 {
    10
}

fn default_dark() -> String {
    "#000000".to_string()
}

fn default_light() -> String {
    "#FFFFFF".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QrConfig {
    pub text: String,
    #[serde(default)]
    pub error_correction: ErrorCorrection,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default = "default_margin")]
    pub margin: u32,
    #[serde(default = "default_dark")]
    pub dark_color: String,
    #[serde(default = "default_light")]
    pub light_color: String,
}

impl ToolConfig for QrConfig {
    const RAW_JSON_INPUT: bool = true;

    fn from_simple(input: String) -> Option<Self> {
        Some(Self {
            text: input,
            error_correction: ErrorCorrection::default(),
            size: default_size(),
            margin: default_margin(),
            dark_color: default_dark(),
            light_color: default_light(),
        })
    }
}

/// A rendered QR symbol.
#[derive(Debug, Clone)]
pub struct QrImage {
    pub svg: String,
    /// Modules per side
    pub modules: usize,
}

impl QrConfig {
    fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("Please enter text or a URL to encode".to_string());
        }
        if !(MIN_QR_SIZE..=MAX_QR_SIZE).contains(&self.size) {
            return Err(format!(
                "Size must be between {} and {} pixels",
                MIN_QR_SIZE, MAX_QR_SIZE
            ));
        }
        if self.margin > MAX_QR_MARGIN || self.margin * 2 >= self.size {
            return Err("Margin is too large for the requested size".to_string());
        }
        for color in [&self.dark_color, &self.light_color] {
            if !HEX_COLOR.is_match(color) {
                return Err(format!("Invalid color: {}", color));
            }
        }
        Ok(())
    }
}

/// Encode the configured text and draw it as a square SVG.
pub fn render_qr(config: &QrConfig) -> Result<QrImage, String> {
    config.validate()?;
    let code = QrCode::with_error_correction_level(config.text.as_bytes(), config.error_correction.into())
        .map_err(|e| format!("Could not encode QR code: {}", e))?;

    let modules = code.width();
    let size = f64::from(config.size);
    let margin = f64::from(config.margin);
    let cell = (size - 2.0 * margin) / modules as f64;

    let mut path = String::new();
    for (index, color) in code.to_colors().iter().enumerate() {
        if *color == Color::Dark {
            let x = margin + (index % modules) as f64 * cell;
            let y = margin + (index / modules) as f64 * cell;
            let _ = write!(path, "M{:.3} {:.3}h{:.3}v{:.3}h-{:.3}z", x, y, cell, cell, cell);
        }
    }

    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            r#"<rect width="100%" height="100%" fill="{light}"/>"#,
            r#"<path fill="{dark}" shape-rendering="crispEdges" d="{path}"/>"#,
            "</svg>"
        ),
        size = config.size,
        light = config.light_color,
        dark = config.dark_color,
        path = path,
    );
    Ok(QrImage { svg, modules })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeGeneratorTool;

impl Tool for QrCodeGeneratorTool {
    fn name(&self) -> &str {
        "qr-code-generator"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "type": "object",
            "required": ["text"],
            "properties": {
                "text": { "type": "string" },
                "error_correction": { "type": "string", "enum": ["L", "M", "Q", "H"] },
                "size": { "type": "integer", "minimum": MIN_QR_SIZE, "maximum": MAX_QR_SIZE },
                "margin": { "type": "integer", "minimum": 0, "maximum": MAX_QR_MARGIN },
                "dark_color": { "type": "string" },
                "light_color": { "type": "string" }
            }
        }))
    }

    fn call(&self, input: String) -> ExecutionResult {
        QrConfig::parse(input)
            .and_then(|config| {
                render_qr(&config)
                    .map(|image| {
                        serde_json::json!({
                            "modules": image.modules,
                            "size": config.size,
                            "svg": image.svg,
                        })
                    })
                    .map_err(invalid_input)
            })
            .into()
    }
}
