//! Percentage calculations.

use serde::Deserialize;
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input, round_to};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PercentageQuery {
    /// `percent`% of `total`
    PercentOf { percent: f64, total: f64 },
    /// What percent `part` is of `total`
    WhatPercent { part: f64, total: f64 },
    /// Change from `from` to `to`, relative to `|from|`
    PercentChange { from: f64, to: f64 },
}

impl ToolConfig for PercentageQuery {
    fn from_simple(_: String) -> Option<Self> {
        None
    }
}

/// Evaluate the query, rounded to 2 decimals.
pub fn calculate_percentage(query: PercentageQuery) -> Result<f64, String> {
    let value = match query {
        PercentageQuery::PercentOf { percent, total } => percent / 100.0 * total,
        PercentageQuery::WhatPercent { part, total } => {
            if total == 0.0 {
                return Err("Cannot divide by zero".to_string());
            }
            part / total * 100.0
        }
        PercentageQuery::PercentChange { from, to } => {
            if from == 0.0 {
                return Err("Initial value cannot be zero".to_string());
            }
            (to - from) / from.abs() * 100.0
        }
    };
    if !value.is_finite() {
        return Err("Please enter valid numbers".to_string());
    }
    Ok(round_to(value, 2))
}

/// The result as displayed: two decimals, with `%` unless it is an amount.
pub fn format_percentage(query: &PercentageQuery, value: f64) -> String {
    match query {
        PercentageQuery::PercentOf { .. } => format!("{:.2}", value),
        _ => format!("{:.2}%", value),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PercentageCalculatorTool;

impl Tool for PercentageCalculatorTool {
    fn name(&self) -> &str {
        "percentage-calculator"
    }

    fn call(&self, input: String) -> ExecutionResult {
        PercentageQuery::parse(input)
            .and_then(|query| {
                calculate_percentage(query)
                    .map(|value| {
                        serde_json::json!({
                            "value": value,
                            "result": format_percentage(&query, value),
                        })
                    })
                    .map_err(invalid_input)
            })
            .into()
    }
}
