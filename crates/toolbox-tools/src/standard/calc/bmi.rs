//! Body mass index.

use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input, round_to};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "system", rename_all = "lowercase")]
pub enum BmiInput {
    Metric {
        weight_kg: f64,
        height_cm: f64,
    },
    Imperial {
        weight_lbs: f64,
        height_ft: f64,
        #[serde(default)]
        height_in: f64,
    },
}

impl ToolConfig for BmiInput {
    fn from_simple(_: String) -> Option<Self> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    Normal,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity")]
    Obesity,
}

impl BmiCategory {
    pub fn for_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    /// Rounded to one decimal
    pub bmi: f64,
    pub category: BmiCategory,
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub fn calculate_bmi(input: BmiInput) -> Result<BmiResult, String> {
    let bmi = match input {
        BmiInput::Metric {
            weight_kg,
            height_cm,
        } => {
            if !positive(weight_kg) || !positive(height_cm) {
                return Err(
                    "Please enter valid positive numbers for height (cm) and weight (kg)"
                        .to_string(),
                );
            }
            let meters = height_cm / 100.0;
            weight_kg / (meters * meters)
        }
        BmiInput::Imperial {
            weight_lbs,
            height_ft,
            height_in,
        } => {
            let inches_valid = height_in.is_finite() && (0.0..12.0).contains(&height_in);
            if !positive(weight_lbs) || !height_ft.is_finite() || height_ft < 0.0 || !inches_valid
            {
                return Err("Please enter valid positive numbers for height (ft and inches) and weight (lbs). Inches should be less than 12".to_string());
            }
            let total_inches = height_ft * 12.0 + height_in;
            if total_inches <= 0.0 {
                return Err("Total height must be positive".to_string());
            }
            703.0 * weight_lbs / (total_inches * total_inches)
        }
    };
    Ok(BmiResult {
        bmi: round_to(bmi, 1),
        category: BmiCategory::for_bmi(bmi),
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BmiCalculatorTool;

impl Tool for BmiCalculatorTool {
    fn name(&self) -> &str {
        "bmi-calculator"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "oneOf": [
                {
                    "type": "object",
                    "required": ["system", "weight_kg", "height_cm"],
                    "properties": {
                        "system": { "const": "metric" },
                        "weight_kg": { "type": "number" },
                        "height_cm": { "type": "number" }
                    }
                },
                {
                    "type": "object",
                    "required": ["system", "weight_lbs", "height_ft"],
                    "properties": {
                        "system": { "const": "imperial" },
                        "weight_lbs": { "type": "number" },
                        "height_ft": { "type": "number" },
                        "height_in": { "type": "number", "minimum": 0, "exclusiveMaximum": 12 }
                    }
                }
            ]
        }))
    }

    fn call(&self, input: String) -> ExecutionResult {
        BmiInput::parse(input)
            .and_then(|config| {
                calculate_bmi(config)
                    .map_err(invalid_input)
                    .and_then(|r| serde_json::to_value(r).map_err(|e| invalid_input(e.to_string())))
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(70.0, 175.0, 22.9, BmiCategory::Normal)]
    #[case(50.0, 180.0, 15.4, BmiCategory::Underweight)]
    #[case(85.0, 175.0, 27.8, BmiCategory::Overweight)]
    #[case(100.0, 170.0, 34.6, BmiCategory::Obesity)]
    fn metric(
        #[case] weight_kg: f64,
        #[case] height_cm: f64,
        #[case] bmi: f64,
        #[case] category: BmiCategory,
    ) {
        let result = calculate_bmi(BmiInput::Metric {
            weight_kg,
            height_cm,
        })
        .unwrap();
        assert_eq!(result.bmi, bmi);
        assert_eq!(result.category, category);
    }

    #[test]
    fn imperial() {
        let result = calculate_bmi(BmiInput::Imperial {
            weight_lbs: 160.0,
            height_ft: 5.0,
            height_in: 10.0,
        })
        .unwrap();
        assert_eq!(result.bmi, 23.0);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn rejects_bad_measurements() {
        assert!(
            calculate_bmi(BmiInput::Metric {
                weight_kg: 0.0,
                height_cm: 170.0
            })
            .is_err()
        );
        assert!(
            calculate_bmi(BmiInput::Imperial {
                weight_lbs: 150.0,
                height_ft: 5.0,
                height_in: 12.0
            })
            .is_err()
        );
        assert!(
            calculate_bmi(BmiInput::Imperial {
                weight_lbs: 150.0,
                height_ft: 0.0,
                height_in: 0.0
            })
            .is_err()
        );
    }

    #[test]
    fn tool_output() {
        let out = BmiCalculatorTool
            .call(r#"{"system":"metric","weight_kg":70,"height_cm":175}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["category"], "Normal weight");
        assert!(BmiCalculatorTool.call("70 175".into()).is_failure());
    }
}
