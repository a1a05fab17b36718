//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the persisted record shape shared by store, repository and
//!   sessions.
//!
//! # Invariants
//! - Every record is identified by a stable opaque `NoteId`.
//! - Deletion is hard removal from the collection; there are no tombstones.

pub mod note;
