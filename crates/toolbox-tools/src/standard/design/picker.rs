//! Color picker: one color in HEX, RGB and HSL.

use serde::Serialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};
use crate::standard::convert::color::{HexInput, Rgb, parse_hex};

/// Hue in degrees, saturation and lightness in percent, all rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub fn to_css(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        // 360 wraps to 0
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ColorPickerTool;

impl Tool for ColorPickerTool {
    fn name(&self) -> &str {
        "color-picker"
    }

    fn call(&self, input: String) -> ExecutionResult {
        HexInput::parse(input)
            .and_then(|config| {
                let rgb = parse_hex(&config.hex).map_err(invalid_input)?;
                let hsl = rgb_to_hsl(rgb);
                Ok(serde_json::json!({
                    "hex": rgb.to_hex(),
                    "rgb": rgb.to_css(),
                    "hsl": hsl.to_css(),
                    "channels": { "rgb": rgb, "hsl": hsl },
                }))
            })
            .into()
    }
}
