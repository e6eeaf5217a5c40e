//! Storage backend errors.

use std::fmt;

/// Which storage backend produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryBackend {
    InMemory,
    File,
}

impl fmt::Display for MemoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryBackend::InMemory => write!(f, "in-memory"),
            MemoryBackend::File => write!(f, "file"),
        }
    }
}

/// What went wrong inside a backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryErrorKind {
    #[error("invalid key: {validation_error}")]
    InvalidKey { validation_error: String },
    #[error("I/O error: {details}")]
    IoError { details: String },
    #[error("serialization error: {details}")]
    SerializationError { details: String },
    #[error("lock poisoned")]
    LockPoisoned,
}

/// Errors raised by memory backends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    #[error("Failed to store '{key}' in {backend} memory: {kind}")]
    StoreFailed {
        key: String,
        backend: MemoryBackend,
        kind: MemoryErrorKind,
    },

    #[error("Failed to load '{key}' from {backend} memory: {kind}")]
    LoadFailed {
        key: String,
        backend: MemoryBackend,
        kind: MemoryErrorKind,
    },

    #[error("Failed to delete '{key}' from {backend} memory: {kind}")]
    DeleteFailed {
        key: String,
        backend: MemoryBackend,
        kind: MemoryErrorKind,
    },
}

impl MemoryError {
    pub fn store_failed(key: impl Into<String>, backend: MemoryBackend, kind: MemoryErrorKind) -> Self {
        MemoryError::StoreFailed {
            key: key.into(),
            backend,
            kind,
        }
    }

    pub fn load_failed(key: impl Into<String>, backend: MemoryBackend, kind: MemoryErrorKind) -> Self {
        MemoryError::LoadFailed {
            key: key.into(),
            backend,
            kind,
        }
    }

    pub fn delete_failed(
        key: impl Into<String>,
        backend: MemoryBackend,
        kind: MemoryErrorKind,
    ) -> Self {
        MemoryError::DeleteFailed {
            key: key.into(),
            backend,
            kind,
        }
    }
}

/// Result type for memory operations.
pub type MemoryResult<T> = Result<T, MemoryError>;
