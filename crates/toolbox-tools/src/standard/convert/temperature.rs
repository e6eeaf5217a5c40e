//! Celsius, Fahrenheit and Kelvin.

use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input, round_to};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureConfig {
    pub value: f64,
    #[serde(default)]
    pub from: TemperatureUnit,
}

impl ToolConfig for TemperatureConfig {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self {
            value: input.trim().parse().ok()?,
            from: TemperatureUnit::default(),
        })
    }
}

/// One temperature expressed in all three scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperatures {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

/// Convert `value` in `from` to every scale, rounded to 2 decimals.
pub fn convert_temperature(value: f64, from: TemperatureUnit) -> Temperatures {
    let celsius = match from {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - 273.15,
    };
    Temperatures {
        celsius: round_to(celsius, 2),
        fahrenheit: round_to(celsius * 9.0 / 5.0 + 32.0, 2),
        kelvin: round_to(celsius + 273.15, 2),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TemperatureConverterTool;

impl Tool for TemperatureConverterTool {
    fn name(&self) -> &str {
        "temperature-converter"
    }

    fn call(&self, input: String) -> ExecutionResult {
        TemperatureConfig::parse(input)
            .and_then(|config| {
                if !config.value.is_finite() {
                    return Err(invalid_input("Please enter a valid number"));
                }
                serde_json::to_value(convert_temperature(config.value, config.from))
                    .map_err(|e| invalid_input(e.to_string()))
            })
            .into()
    }
}
