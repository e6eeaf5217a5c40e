//! Key-value storage traits used by stateful tools (the notepad).

use std::fmt;

use crate::error::MemoryError;

/// Validated storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemoryKey(String);

/// Errors that can occur when creating a `MemoryKey`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMemoryKey {
    /// Memory key is empty or contains only whitespace.
    #[error("Memory key cannot be empty")]
    Empty,
    /// Memory key exceeds the maximum allowed length.
    #[error("Memory key too long ({0} chars, max {max})", max = MemoryKey::MAX_LENGTH)]
    TooLong(usize),
    /// Memory key contains characters other than alphanumerics, `_`, `-`, `.` and `:`.
    #[error("Memory key contains invalid characters: {0}")]
    InvalidChars(String),
}

impl MemoryKey {
    /// Maximum allowed length for memory keys.
    pub const MAX_LENGTH: usize = 128;

    /// Create a new validated memory key.
    ///
    /// ```rust
    /// use toolbox_core::memory::MemoryKey;
    ///
    /// assert!(MemoryKey::new("onlineNotepadContent").is_ok());
    /// assert!(MemoryKey::new("notes:draft_1").is_ok());
    /// assert!(MemoryKey::new("").is_err());
    /// assert!(MemoryKey::new("has space").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, InvalidMemoryKey> {
        if key.trim().is_empty() {
            return Err(InvalidMemoryKey::Empty);
        }
        if key.len() > Self::MAX_LENGTH {
            return Err(InvalidMemoryKey::TooLong(key.len()));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
        {
            return Err(InvalidMemoryKey::InvalidChars(key.to_string()));
        }
        Ok(Self(key.to_string()))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A key/value pair to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUpdate {
    pub key: MemoryKey,
    pub value: String,
}

impl MemoryUpdate {
    /// Create an update, validating the key.
    pub fn new(key: &str, value: &str) -> Result<Self, InvalidMemoryKey> {
        Ok(Self {
            key: MemoryKey::new(key)?,
            value: value.to_string(),
        })
    }

    /// Create an update from an already-validated key.
    pub fn from_validated(key: MemoryKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Read access to a key-value store.
pub trait MemoryReader: Send + Sync {
    /// Load a value, `Ok(None)` when the key is absent.
    fn load(&self, key: &MemoryKey) -> Result<Option<String>, MemoryError>;

    /// Load several values in one call, preserving order.
    fn load_many(&self, keys: &[MemoryKey]) -> Result<Vec<Option<String>>, MemoryError> {
        keys.iter().map(|key| self.load(key)).collect()
    }
}

/// Write access to a key-value store.
pub trait MemoryWriter: Send + Sync {
    /// Insert or overwrite one value.
    fn store(&mut self, update: MemoryUpdate) -> Result<(), MemoryError>;

    /// Insert or overwrite several values as one write.
    fn store_many(&mut self, updates: Vec<MemoryUpdate>) -> Result<(), MemoryError> {
        for update in updates {
            self.store(update)?;
        }
        Ok(())
    }

    /// Remove keys. Missing keys are ignored.
    fn remove(&mut self, keys: &[MemoryKey]) -> Result<(), MemoryError>;
}

/// Convenience bound for stores that can both read and write.
pub trait MemoryStore: MemoryReader + MemoryWriter {}

impl<T: MemoryReader + MemoryWriter> MemoryStore for T {}
