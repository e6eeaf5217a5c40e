use std::sync::Arc;

use dashmap::DashMap;
use toolbox_core::error::MemoryError;
use toolbox_core::memory::{MemoryKey, MemoryReader, MemoryUpdate, MemoryWriter};

/// Transient storage backed by a concurrent map.
///
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryMemory {
    store: Arc<DashMap<MemoryKey, String>>,
}

impl InMemoryMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl MemoryReader for InMemoryMemory {
    fn load(&self, key: &MemoryKey) -> Result<Option<String>, MemoryError> {
        Ok(self.store.get(key).map(|entry| entry.value().clone()))
    }
}

impl MemoryWriter for InMemoryMemory {
    fn store(&mut self, update: MemoryUpdate) -> Result<(), MemoryError> {
        self.store.insert(update.key, update.value);
        Ok(())
    }

    fn remove(&mut self, keys: &[MemoryKey]) -> Result<(), MemoryError> {
        for key in keys {
            self.store.remove(key);
        }
        Ok(())
    }
}
