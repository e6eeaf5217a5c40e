//! Hex and RGB color notation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

static HEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?(?:([0-9a-fA-F]{3})|([0-9a-fA-F]{6}))$").expect("valid regex")
});

static RGB_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:rgb)?\(?\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*\)?$").expect("valid regex")
});

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from arbitrary integers, clamping each channel to 0-255.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        let clamp = |c: i64| c.clamp(0, 255) as u8;
        Self {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
        }
    }

    /// Uppercase `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)`
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Parse `#RGB` or `#RRGGBB`, the `#` being optional.
pub fn parse_hex(input: &str) -> Result<Rgb, String> {
    let invalid = || format!("Invalid hex color: {}", input.trim());
    let caps = HEX.captures(input.trim()).ok_or_else(invalid)?;
    let digits: String = match (caps.get(1), caps.get(2)) {
        (Some(short), _) => short.as_str().chars().flat_map(|c| [c, c]).collect(),
        (None, Some(long)) => long.as_str().to_string(),
        (None, None) => return Err(invalid()),
    };
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct HexInput {
    pub hex: String,
}

impl ToolConfig for HexInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self { hex: input })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RgbInput {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl ToolConfig for RgbInput {
    /// Accepts `rgb(1, 2, 3)`, `(1, 2, 3)` or `1,2,3`.
    fn from_simple(input: String) -> Option<Self> {
        let caps = RGB_TEXT.captures(input.trim())?;
        let channel = |i: usize| caps.get(i)?.as_str().parse().ok();
        Some(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HexToRgbTool;

impl Tool for HexToRgbTool {
    fn name(&self) -> &str {
        "hex-to-rgb-converter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        HexInput::parse(input)
            .and_then(|config| {
                parse_hex(&config.hex)
                    .map(|rgb| {
                        serde_json::json!({
                            "r": rgb.r,
                            "g": rgb.g,
                            "b": rgb.b,
                            "hex": rgb.to_hex(),
                            "rgb": rgb.to_css(),
                        })
                    })
                    .map_err(invalid_input)
            })
            .into()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RgbToHexTool;

impl Tool for RgbToHexTool {
    fn name(&self) -> &str {
        "rgb-to-hex-converter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        RgbInput::parse(input)
            .map(|config| {
                let rgb = Rgb::clamped(config.r, config.g, config.b);
                serde_json::json!({ "hex": rgb.to_hex(), "rgb": rgb.to_css() })
            })
            .into()
    }
}
