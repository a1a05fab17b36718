//! JSON slot store backed by a single file.
//!
//! # Responsibility
//! - Hold the whole note collection as one JSON array in one file.
//! - Treat an absent slot as the normal first-run state, not a failure.
//!
//! # Invariants
//! - Writes replace the entire slot; there is no incremental update.
//! - The slot file name is versioned; a future layout change gets a new
//!   file instead of migrating this one.

use super::{NoteStore, StoreResult};
use crate::model::note::Note;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default slot file name. The suffix versions the layout.
pub const DEFAULT_SLOT_FILE: &str = "notes.app.items.v1.json";

/// File-backed storage slot holding the JSON-encoded note collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over an explicit slot file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store over the default slot file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_SLOT_FILE))
    }

    /// Returns the slot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStore for JsonFileStore {
    fn try_read_all(&self) -> StoreResult<Vec<Note>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // An absent slot is the normal first-run state.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let notes: Vec<Note> = serde_json::from_str(&raw)?;
        Ok(notes)
    }

    fn try_write_all(&self, notes: &[Note]) -> StoreResult<()> {
        let encoded = serde_json::to_string(notes)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}
