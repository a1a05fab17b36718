//! Note record and id generation.
//!
//! # Responsibility
//! - Define the persisted note record and its wire field names.
//! - Own id generation and creation-time stamping.
//!
//! # Invariants
//! - `id` is assigned once and never changes for the life of the record.
//! - Records produced by this crate always satisfy `created_at <= updated_at`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// An opaque string rather than a parsed UUID so that foreign ids already
/// present in a storage slot survive round-trips untouched.
pub type NoteId = String;

/// Title assigned when a note is created with a blank title.
pub const DEFAULT_NOTE_TITLE: &str = "Untitled note";

/// Persisted note record.
///
/// Field names follow the storage slot layout (`createdAt` / `updatedAt`,
/// epoch milliseconds). Unknown fields in persisted data are ignored and
/// missing fields fall back to defaults, so older or foreign slot contents
/// never poison a read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque id assigned at creation.
    #[serde(default)]
    pub id: NoteId,
    /// Free-form title. Defaulted at creation, stored verbatim on update.
    #[serde(default)]
    pub title: String,
    /// Free-form body, may be empty.
    #[serde(default)]
    pub content: String,
    /// Creation time in epoch milliseconds, set once.
    #[serde(default)]
    pub created_at: i64,
    /// Last update time in epoch milliseconds; the sole list sort key.
    #[serde(default)]
    pub updated_at: i64,
}

impl Note {
    /// Creates a note record stamped at `now_ms`.
    ///
    /// # Invariants
    /// - A fresh id is generated from `now_ms` plus a random component.
    /// - `created_at == updated_at == now_ms`.
    pub fn new(title: impl Into<String>, content: impl Into<String>, now_ms: i64) -> Self {
        Self {
            id: new_note_id(now_ms),
            title: title.into(),
            content: content.into(),
            created_at: now_ms,
            updated_at: now_ms,
        }
    }
}

/// Generates a fresh note id from a timestamp plus a random component.
///
/// The pair makes collisions within one collection overwhelmingly unlikely;
/// no global uniqueness is promised since the collection is single-user.
pub fn new_note_id(now_ms: i64) -> NoteId {
    let random = Uuid::new_v4().simple().to_string();
    format!("{:x}-{}", now_ms, &random[..12])
}
