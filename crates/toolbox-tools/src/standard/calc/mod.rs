//! # Calculators
//!
//! Age, BMI, loan payments and percentages.

pub mod age;
pub mod bmi;
pub mod loan;
pub mod percentage;

pub use age::{Age, AgeCalculatorTool, calculate_age};
pub use bmi::{BmiCalculatorTool, BmiCategory, BmiInput, BmiResult, calculate_bmi};
pub use loan::{LoanCalculatorTool, LoanConfig, LoanSummary, calculate_loan};
pub use percentage::{PercentageCalculatorTool, PercentageQuery, calculate_percentage};
