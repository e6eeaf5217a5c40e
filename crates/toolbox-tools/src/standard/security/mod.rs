//! # Security
//!
//! Password-based encryption and message digests.

pub mod cipher;
pub mod hash;

pub use cipher::{CipherAction, TextCipherTool, decrypt_text, encrypt_text};
pub use hash::{Md5HashTool, Sha256HashTool, md5_hex, sha1_hex, sha256_hex};
