//! # Generators
//!
//! Placeholder text, passwords and QR codes.

pub mod lorem;
pub mod password;
pub mod qr;

pub use lorem::{LoremIpsumTool, LoremUnit, generate_lorem};
pub use password::{PasswordConfig, PasswordGeneratorTool, generate_password};
pub use qr::{ErrorCorrection, QrCodeGeneratorTool, QrConfig, QrImage, render_qr};
