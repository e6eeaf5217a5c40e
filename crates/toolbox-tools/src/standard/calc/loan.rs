//! Amortized loan payments.

use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input, round_to};

pub const MAX_INTEREST_RATE: f64 = 100.0;
pub const MAX_TERM_YEARS: u32 = 50;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LoanConfig {
    pub amount: f64,
    /// Annual rate in percent
    pub annual_rate: f64,
    pub years: u32,
}

impl ToolConfig for LoanConfig {
    fn from_simple(_: String) -> Option<Self> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub payments: u32,
}

/// Fixed monthly payment for a fully amortized loan, amounts rounded to
/// cents.
pub fn calculate_loan(config: LoanConfig) -> Result<LoanSummary, String> {
    if !config.amount.is_finite() || config.amount <= 0.0 {
        return Err("Loan amount must be positive".to_string());
    }
    if !config.annual_rate.is_finite() || !(0.0..=MAX_INTEREST_RATE).contains(&config.annual_rate)
    {
        return Err(format!(
            "Interest rate must be between 0 and {}",
            MAX_INTEREST_RATE
        ));
    }
    if !(1..=MAX_TERM_YEARS).contains(&config.years) {
        return Err(format!(
            "Loan term must be between 1 and {} years",
            MAX_TERM_YEARS
        ));
    }

    let r = config.annual_rate / 100.0 / 12.0;
    let n = config.years * 12;
    let monthly = if r == 0.0 {
        config.amount / f64::from(n)
    } else {
        let growth = (1.0 + r).powi(n as i32);
        config.amount * r * growth / (growth - 1.0)
    };
    let total = monthly * f64::from(n);
    Ok(LoanSummary {
        monthly_payment: round_to(monthly, 2),
        total_payment: round_to(total, 2),
        total_interest: round_to(total - config.amount, 2),
        payments: n,
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoanCalculatorTool;

impl Tool for LoanCalculatorTool {
    fn name(&self) -> &str {
        "loan-calculator"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "type": "object",
            "required": ["amount", "annual_rate", "years"],
            "properties": {
                "amount": { "type": "number", "exclusiveMinimum": 0 },
                "annual_rate": { "type": "number", "minimum": 0, "maximum": MAX_INTEREST_RATE },
                "years": { "type": "integer", "minimum": 1, "maximum": MAX_TERM_YEARS }
            }
        }))
    }

    fn call(&self, input: String) -> ExecutionResult {
        LoanConfig::parse(input)
            .and_then(|config| {
                calculate_loan(config)
                    .map_err(invalid_input)
                    .and_then(|s| serde_json::to_value(s).map_err(|e| invalid_input(e.to_string())))
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_mortgage() {
        let summary = calculate_loan(LoanConfig {
            amount: 200_000.0,
            annual_rate: 6.0,
            years: 30,
        })
        .unwrap();
        assert_eq!(summary.monthly_payment, 1199.10);
        assert_eq!(summary.payments, 360);
        assert!((summary.total_interest - 231_676.38).abs() < 0.02);
    }

    #[test]
    fn zero_interest_divides_evenly() {
        let summary = calculate_loan(LoanConfig {
            amount: 12_000.0,
            annual_rate: 0.0,
            years: 1,
        })
        .unwrap();
        assert_eq!(summary.monthly_payment, 1000.0);
        assert_eq!(summary.total_interest, 0.0);
    }

    #[test]
    fn validates_terms() {
        let base = LoanConfig {
            amount: 1000.0,
            annual_rate: 5.0,
            years: 5,
        };
        assert!(calculate_loan(LoanConfig { amount: -1.0, ..base }).is_err());
        assert!(calculate_loan(LoanConfig { annual_rate: 150.0, ..base }).is_err());
        assert!(calculate_loan(LoanConfig { years: 0, ..base }).is_err());
        assert!(calculate_loan(LoanConfig { years: 51, ..base }).is_err());
    }

    #[test]
    fn tool_requires_object() {
        assert!(LoanCalculatorTool.call("1000".into()).is_failure());
        let out = LoanCalculatorTool
            .call(r#"{"amount":12000,"annual_rate":0,"years":1}"#.into())
            .output_json()
            .unwrap();
        assert_eq!(out["monthly_payment"], 1000.0);
    }
}
