//! Storage-slot persistence for the note collection.
//!
//! # Responsibility
//! - Define the read-all/write-all contract over a single persisted slot.
//! - Recover every storage failure locally so callers above never see one.
//!
//! # Invariants
//! - `read_all` returns an empty collection for absent, corrupt or
//!   unreadable slots.
//! - `write_all` replaces the whole slot or silently leaves the previous
//!   contents in place; there is no partial write at this level.

use crate::model::note::Note;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, DEFAULT_SLOT_FILE};
pub use memory::MemoryStore;

/// Result alias for typed slot operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reasons for slot reads and writes.
///
/// These never cross the repository boundary. The provided trait methods
/// fold them into the empty-collection / no-op recovery the public contract
/// requires, keeping the reason available for logging.
#[derive(Debug)]
pub enum StoreError {
    /// The slot could not be read or written at the IO level.
    Io(std::io::Error),
    /// The slot bytes were not a well-formed JSON note array.
    Serde(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "slot io error: {err}"),
            StoreError::Serde(err) => write!(f, "slot decode error: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err)
    }
}

/// Read-all/write-all contract over the persisted note collection.
///
/// Implementations expose the typed fallible operations; the provided
/// methods wrap them in the never-fail surface the repository relies on.
pub trait NoteStore {
    /// Reads the full collection, reporting the failure reason if any.
    fn try_read_all(&self) -> StoreResult<Vec<Note>>;

    /// Replaces the full collection, reporting the failure reason if any.
    fn try_write_all(&self, notes: &[Note]) -> StoreResult<()>;

    /// Reads the full collection, recovering to empty on any failure.
    fn read_all(&self) -> Vec<Note> {
        match self.try_read_all() {
            Ok(notes) => notes,
            Err(err) => {
                warn!("event=store_read module=store status=recovered error={err}");
                Vec::new()
            }
        }
    }

    /// Persists the full collection, swallowing any failure.
    fn write_all(&self, notes: &[Note]) {
        if let Err(err) = self.try_write_all(notes) {
            warn!(
                "event=store_write module=store status=swallowed count={} error={err}",
                notes.len()
            );
        }
    }
}
