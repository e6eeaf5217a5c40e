//! Password-based text encryption.
//!
//! AES-256-GCM with a key stretched from the password by PBKDF2-HMAC-SHA256.
//! Ciphertext is `base64(iv).base64(ciphertext || tag)`.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit, OsRng, rand_core::RngCore},
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;
use sha2::Sha256;
use toolbox_core::{ExecutionResult, Tool};
use zeroize::Zeroize;

use crate::core::{ToolConfig, invalid_input};

/// Fixed salt shared with data produced by earlier versions of the tool.
pub const KEY_SALT: &[u8] = b"someSaltValueHere";
pub const PBKDF2_ITERATIONS: u32 = 100_000;
const IV_LEN: usize = 12;

const INVALID_FORMAT: &str = "Invalid encrypted data format.";

#[derive(Clone, Zeroize)]
#[zeroize(drop)]
struct DerivedKey([u8; 32]);

impl DerivedKey {
    fn from_password(password: &str) -> Self {
        let mut key = [0u8; 32];
        pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), KEY_SALT, PBKDF2_ITERATIONS, &mut key);
        Self(key)
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new((&self.0).into())
    }
}

/// Encrypt `plaintext` under `password` with a fresh random IV.
pub fn encrypt_text(plaintext: &str, password: &str) -> Result<String, String> {
    let cipher = DerivedKey::from_password(password).cipher();
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&iv), plaintext.as_bytes())
        .map_err(|_| "Encryption failed".to_string())?;
    Ok(format!("{}.{}", BASE64.encode(iv), BASE64.encode(ciphertext)))
}

/// Reverse [`encrypt_text`].
pub fn decrypt_text(encrypted: &str, password: &str) -> Result<String, String> {
    let parts: Vec<&str> = encrypted.trim().split('.').collect();
    let [iv, ciphertext] = parts.as_slice() else {
        return Err(INVALID_FORMAT.to_string());
    };
    let iv = BASE64.decode(iv).map_err(|_| INVALID_FORMAT.to_string())?;
    let ciphertext = BASE64
        .decode(ciphertext)
        .map_err(|_| INVALID_FORMAT.to_string())?;
    if iv.len() != IV_LEN {
        return Err(INVALID_FORMAT.to_string());
    }

    let cipher = DerivedKey::from_password(password).cipher();
    let plaintext = cipher
        .decrypt(Nonce::from_slice(&iv), ciphertext.as_slice())
        .map_err(|_| "Decryption failed. Check the password and the encrypted text.".to_string())?;
    String::from_utf8(plaintext).map_err(|_| "Decrypted data is not valid UTF-8 text".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherAction {
    #[default]
    Encrypt,
    Decrypt,
}

#[derive(Clone, Deserialize)]
pub struct CipherConfig {
    #[serde(default)]
    pub action: CipherAction,
    pub text: String,
    pub password: String,
}

impl std::fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherConfig")
            .field("action", &self.action)
            .field("text_len", &self.text.len())
            .field("password", &"***")
            .finish()
    }
}

impl ToolConfig for CipherConfig {
    fn from_simple(_: String) -> Option<Self> {
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextCipherTool;

impl Tool for TextCipherTool {
    fn name(&self) -> &str {
        "text-encryptor-decryptor"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "type": "object",
            "required": ["text", "password"],
            "properties": {
                "action": { "type": "string", "enum": ["encrypt", "decrypt"] },
                "text": { "type": "string" },
                "password": { "type": "string" }
            }
        }))
    }

    fn call(&self, input: String) -> ExecutionResult {
        CipherConfig::parse(input)
            .and_then(|config| {
                if config.text.trim().is_empty() || config.password.is_empty() {
                    return Err(invalid_input("Please provide text and a password"));
                }
                let result = match config.action {
                    CipherAction::Encrypt => encrypt_text(&config.text, &config.password),
                    CipherAction::Decrypt => decrypt_text(&config.text, &config.password),
                }
                .map_err(invalid_input)?;
                Ok(serde_json::json!({ "result": result }))
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let encrypted = encrypt_text("attack at dawn ✓", "hunter2").unwrap();
        assert_eq!(encrypted.matches('.').count(), 1);
        assert_eq!(decrypt_text(&encrypted, "hunter2").unwrap(), "attack at dawn ✓");
    }

    #[test]
    fn fresh_iv_per_encryption() {
        let a = encrypt_text("same", "pw").unwrap();
        let b = encrypt_text("same", "pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn wrong_password_fails() {
        let encrypted = encrypt_text("secret", "right").unwrap();
        assert!(decrypt_text(&encrypted, "wrong").is_err());
    }

    #[test]
    fn malformed_ciphertext() {
        for bad in ["nodot", "a.b.c", "!!!.AAAA", "AAAA.AAAA"] {
            assert_eq!(decrypt_text(bad, "pw").unwrap_err(), INVALID_FORMAT, "{bad}");
        }
    }

    #[test]
    fn tool_flow() {
        let out = TextCipherTool
            .call(r#"{"text":"hello","password":"pw"}"#.into())
            .output_json()
            .unwrap();
        let encrypted = out["result"].as_str().unwrap();
        let input = serde_json::json!({ "action": "decrypt", "text": encrypted, "password": "pw" });
        let out = TextCipherTool.call(input.to_string()).output_json().unwrap();
        assert_eq!(out["result"], "hello");

        assert!(TextCipherTool.call(r#"{"text":"hello","password":""}"#.into()).is_failure());
    }
}
