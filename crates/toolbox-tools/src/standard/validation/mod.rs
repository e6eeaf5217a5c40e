//! # Validation Tools

pub mod card;
pub mod email;

pub use card::{CardBrand, CreditCardValidatorTool, luhn_valid, normalize_card_number};
pub use email::{EmailValidatorTool, is_valid_email};
