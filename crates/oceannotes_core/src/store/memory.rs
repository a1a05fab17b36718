//! In-memory storage slot.
//!
//! Backs tests and ephemeral sessions with the same contract as the file
//! slot. Interior mutability is a `RefCell`, matching the single-threaded
//! execution model of the core.

use super::{NoteStore, StoreResult};
use crate::model::note::Note;
use std::cell::RefCell;

/// Volatile note store keeping the collection in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RefCell<Vec<Note>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `notes`.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RefCell::new(notes),
        }
    }
}

impl NoteStore for MemoryStore {
    fn try_read_all(&self) -> StoreResult<Vec<Note>> {
        Ok(self.notes.borrow().clone())
    }

    fn try_write_all(&self, notes: &[Note]) -> StoreResult<()> {
        *self.notes.borrow_mut() = notes.to_vec();
        Ok(())
    }
}
