use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use toolbox_core::error::{MemoryBackend, MemoryError, MemoryErrorKind};
use toolbox_core::memory::{MemoryKey, MemoryReader, MemoryUpdate, MemoryWriter};

/// Persistent key-value storage synced to one JSON file.
///
/// Every write rewrites the whole file through a temporary file and an
/// atomic rename. A file that fails to parse is copied aside as
/// `<name>.corrupted.<unix-ts>` and the store starts empty.
///
/// Two `FileMemory` values must not point at the same path; share one
/// instance behind a `Mutex` instead.
pub struct FileMemory {
    path: PathBuf,
    cache: BTreeMap<String, String>,
}

impl FileMemory {
    /// Open the store at `path`, loading existing data if present.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = Self::load_cache(&path).unwrap_or_default();
        Self { path, cache }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_cache(path: &Path) -> Option<BTreeMap<String, String>> {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(cache) => {
                    tracing::debug!(path = ?path, entries = cache.len(), "Loaded memory file");
                    Some(cache)
                }
                Err(e) => {
                    tracing::error!(
                        path = ?path,
                        error = %e,
                        "Failed to parse memory file, starting fresh"
                    );
                    if let Some(parent) = path.parent() {
                        let backup = parent.join(format!(
                            "{}.corrupted.{}",
                            path.file_name().unwrap_or_default().to_string_lossy(),
                            chrono::Utc::now().timestamp()
                        ));
                        let _ = fs::copy(path, backup);
                    }
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?path, "Memory file not found, starting fresh");
                None
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Failed to read memory file");
                None
            }
        }
    }

    fn persist(&self, key: &str) -> Result<(), MemoryError> {
        let io_error = |details: String| {
            MemoryError::store_failed(key, MemoryBackend::File, MemoryErrorKind::IoError { details })
        };

        let json = serde_json::to_string_pretty(&self.cache).map_err(|e| {
            MemoryError::store_failed(
                key,
                MemoryBackend::File,
                MemoryErrorKind::SerializationError {
                    details: e.to_string(),
                },
            )
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| io_error(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json).map_err(|e| {
            tracing::error!(path = ?tmp_path, error = %e, "Failed to write memory file");
            io_error(format!("Failed to write to {}: {}", tmp_path.display(), e))
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            tracing::error!(from = ?tmp_path, to = ?self.path, error = %e, "Failed to rename memory file");
            io_error(format!(
                "Failed to rename {} to {}: {}",
                tmp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(path = ?self.path, entries = self.cache.len(), "Persisted memory file");
        Ok(())
    }
}

impl MemoryReader for FileMemory {
    fn load(&self, key: &MemoryKey) -> Result<Option<String>, MemoryError> {
        Ok(self.cache.get(key.as_str()).cloned())
    }
}

impl MemoryWriter for FileMemory {
    fn store(&mut self, update: MemoryUpdate) -> Result<(), MemoryError> {
        let key = update.key.as_str().to_string();
        let previous = self.cache.insert(key.clone(), update.value);
        if let Err(e) = self.persist(&key) {
            match previous {
                Some(value) => self.cache.insert(key, value),
                None => self.cache.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn store_many(&mut self, updates: Vec<MemoryUpdate>) -> Result<(), MemoryError> {
        let Some(first) = updates.first().map(|u| u.key.as_str().to_string()) else {
            return Ok(());
        };
        let snapshot = self.cache.clone();
        for update in updates {
            self.cache
                .insert(update.key.as_str().to_string(), update.value);
        }
        self.persist(&first).inspect_err(|_| self.cache = snapshot)
    }

    fn remove(&mut self, keys: &[MemoryKey]) -> Result<(), MemoryError> {
        let Some(first) = keys.first() else {
            return Ok(());
        };
        let snapshot = self.cache.clone();
        let mut changed = false;
        for key in keys {
            changed |= self.cache.remove(key.as_str()).is_some();
        }
        if !changed {
            return Ok(());
        }
        self.persist(first.as_str()).map_err(|e| {
            self.cache = snapshot;
            match e {
                MemoryError::StoreFailed { key, backend, kind } => {
                    MemoryError::delete_failed(key, backend, kind)
                }
                other => other,
            }
        })
    }
}
