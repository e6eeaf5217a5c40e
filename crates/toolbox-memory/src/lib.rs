//! # Toolbox Memory Backends
//!
//! Key-value storage for tools that keep state between calls.
//!
//! - **[FileMemory]**: persistent storage in a single JSON file
//! - **[InMemoryMemory]**: transient storage, lost when the process exits
//!
//! ```rust
//! use toolbox_memory::{InMemoryMemory, MemoryKey, MemoryReader, MemoryUpdate, MemoryWriter};
//!
//! let mut memory = InMemoryMemory::new();
//! memory.store(MemoryUpdate::new("onlineNotepadContent", "hello").unwrap()).unwrap();
//!
//! let key = MemoryKey::new("onlineNotepadContent").unwrap();
//! assert_eq!(memory.load(&key).unwrap().as_deref(), Some("hello"));
//! ```

pub use toolbox_core::memory::*;

mod file_memory;
pub use file_memory::FileMemory;

mod in_memory;
pub use in_memory::InMemoryMemory;
