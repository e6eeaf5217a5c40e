//! Online notepad backed by a [`MemoryStore`].
//!
//! The note lives under a single fixed key with a companion key holding the
//! ISO-8601 time of the last save. Both are written and removed together.

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, FailureReason, MemoryError, MemoryKey, MemoryStore, MemoryUpdate, Tool};
use toolbox_memory::InMemoryMemory;

use crate::core::ToolConfig;

pub const NOTEPAD_KEY: &str = "onlineNotepadContent";
pub const NOTEPAD_TIMESTAMP_KEY: &str = "onlineNotepadContent_timestamp";

/// Store shared between the notepad and whoever else holds it.
pub type SharedStore = Arc<Mutex<Box<dyn MemoryStore>>>;

/// Wrap a backend for use by [`NotepadTool`].
pub fn shared_store(store: impl MemoryStore + 'static) -> SharedStore {
    Arc::new(Mutex::new(Box::new(store)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NotepadCommand {
    Save { content: String },
    Load,
    Clear,
}

impl ToolConfig for NotepadCommand {
    fn from_simple(input: String) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "" | "load" => Some(NotepadCommand::Load),
            "clear" => Some(NotepadCommand::Clear),
            _ => None,
        }
    }
}

/// The stored note. `saved_at` is `None` when nothing has been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub content: String,
    pub saved_at: Option<String>,
}

fn storage_failure(e: MemoryError) -> FailureReason {
    tracing::error!(error = %e, "Notepad storage failed");
    FailureReason::IoError {
        message: e.to_string(),
    }
}

fn note_keys() -> Result<(MemoryKey, MemoryKey), FailureReason> {
    let key = |k: &str| {
        MemoryKey::new(k).map_err(|e| FailureReason::InternalError {
            message: e.to_string(),
        })
    };
    Ok((key(NOTEPAD_KEY)?, key(NOTEPAD_TIMESTAMP_KEY)?))
}

#[derive(Clone)]
pub struct NotepadTool {
    store: SharedStore,
}

impl fmt::Debug for NotepadTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotepadTool").finish_non_exhaustive()
    }
}

impl Default for NotepadTool {
    fn default() -> Self {
        Self::new(shared_store(InMemoryMemory::new()))
    }
}

impl NotepadTool {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    fn with_store<T>(
        &self,
        f: impl FnOnce(&mut dyn MemoryStore) -> Result<T, MemoryError>,
    ) -> Result<T, FailureReason> {
        let mut guard = self.store.lock().map_err(|_| FailureReason::InternalError {
            message: "notepad store lock poisoned".to_string(),
        })?;
        f(&mut **guard).map_err(storage_failure)
    }

    /// Overwrite the note, stamping it with `now`.
    pub fn save(&self, content: &str, now: DateTime<Utc>) -> Result<Note, FailureReason> {
        let (key, stamp_key) = note_keys()?;
        let saved_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        self.with_store(|store| {
            store.store_many(vec![
                MemoryUpdate::from_validated(key, content),
                MemoryUpdate::from_validated(stamp_key, saved_at.clone()),
            ])
        })?;
        tracing::debug!(chars = content.chars().count(), "Saved note");
        Ok(Note {
            content: content.to_string(),
            saved_at: Some(saved_at),
        })
    }

    pub fn load(&self) -> Result<Note, FailureReason> {
        let (key, stamp_key) = note_keys()?;
        let mut values = self
            .with_store(|store| store.load_many(&[key, stamp_key]))?
            .into_iter();
        let content = values.next().flatten().unwrap_or_default();
        let saved_at = values.next().flatten();
        Ok(Note { content, saved_at })
    }

    pub fn clear(&self) -> Result<(), FailureReason> {
        let (key, stamp_key) = note_keys()?;
        self.with_store(|store| store.remove(&[key, stamp_key]))?;
        tracing::debug!("Cleared note");
        Ok(())
    }

    fn execute(&self, command: NotepadCommand) -> Result<serde_json::Value, FailureReason> {
        let note = match command {
            NotepadCommand::Save { content } => self.save(&content, Utc::now())?,
            NotepadCommand::Load => self.load()?,
            NotepadCommand::Clear => {
                self.clear()?;
                return Ok(serde_json::json!({ "cleared": true }));
            }
        };
        Ok(serde_json::json!({ "content": note.content, "saved_at": note.saved_at }))
    }
}

impl Tool for NotepadTool {
    fn name(&self) -> &str {
        "online-notepad"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "type": "object",
            "properties": {
                "action": { "type": "string", "enum": ["save", "load", "clear"] },
                "content": { "type": "string" }
            },
            "required": ["action"]
        }))
    }

    fn call(&self, input: String) -> ExecutionResult {
        NotepadCommand::parse(input)
            .and_then(|command| self.execute(command))
            .into()
    }
}
