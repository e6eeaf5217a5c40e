//! Age in whole years, months and days.

use chrono::{Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

#[derive(Debug, Clone, Deserialize)]
pub struct AgeConfig {
    pub birth_date: NaiveDate,
    /// Defaults to today (UTC)
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

impl ToolConfig for AgeConfig {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self {
            birth_date: input.trim().parse().ok()?,
            target_date: None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Elapsed calendar time from `birth` to `target`.
///
/// Month arithmetic clamps to the last day of shorter months, so a birthday
/// on the 31st anniversaries on the 30th in April.
pub fn calculate_age(birth: NaiveDate, target: NaiveDate) -> Result<Age, String> {
    if birth > target {
        return Err("Birth date cannot be after the target date".to_string());
    }
    let month_index = |d: NaiveDate| d.year() * 12 + d.month0() as i32;
    let mut total_months = (month_index(target) - month_index(birth)).max(0) as u32;
    let anchor = loop {
        match birth.checked_add_months(Months::new(total_months)) {
            Some(anchor) if anchor <= target => break anchor,
            _ if total_months == 0 => break birth,
            _ => total_months -= 1,
        }
    };
    Ok(Age {
        years: total_months / 12,
        months: total_months % 12,
        days: (target - anchor).num_days() as u32,
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AgeCalculatorTool;

impl Tool for AgeCalculatorTool {
    fn name(&self) -> &str {
        "age-calculator"
    }

    fn call(&self, input: String) -> ExecutionResult {
        AgeConfig::parse(input)
            .and_then(|config| {
                let target = config
                    .target_date
                    .unwrap_or_else(|| Utc::now().date_naive());
                let age = calculate_age(config.birth_date, target).map_err(invalid_input)?;
                Ok(serde_json::json!({
                    "years": age.years,
                    "months": age.months,
                    "days": age.days,
                    "as_of": target.to_string(),
                }))
            })
            .into()
    }
}
