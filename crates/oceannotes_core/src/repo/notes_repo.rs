//! Notes repository: the five-operation CRUD surface.
//!
//! # Responsibility
//! - Compose the storage slot with id generation, timestamping, filtering
//!   and recency ordering.
//! - Hold the (currently inert) remote-backend selection seam.
//!
//! # Invariants
//! - `create` prepends; the stored collection is never re-sorted in place.
//! - `update` replaces the record in place and bumps `updated_at` only.
//! - Unknown ids are absent results, not errors.

use crate::clock::Clock;
use crate::config::RepoConfig;
use crate::model::note::{Note, DEFAULT_NOTE_TITLE};
use crate::search::filter::filter_notes;
use crate::store::NoteStore;
use log::info;

/// Optional fields accepted by [`NotesRepository::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateNoteInput {
    /// Title; trimmed, blank falls back to [`DEFAULT_NOTE_TITLE`].
    pub title: Option<String>,
    /// Body; absent means empty.
    pub content: Option<String>,
}

/// Partial update accepted by [`NotesRepository::update`].
///
/// `Some` fields overwrite the stored value verbatim; `None` fields are
/// left untouched. Titles are not trimmed or defaulted here, only at
/// creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// CRUD repository over a single-slot note collection.
///
/// Constructed explicitly with its store, clock and configuration; there
/// is no process-wide instance. The remote backend named by
/// [`RepoConfig::api_base`] is a reserved seam: it is logged at
/// construction and never consulted afterwards, every operation goes to
/// the local store.
pub struct NotesRepository<S: NoteStore, C: Clock> {
    store: S,
    clock: C,
    config: RepoConfig,
}

impl<S: NoteStore, C: Clock> NotesRepository<S, C> {
    /// Creates a repository over an explicit store and clock.
    pub fn new(store: S, clock: C, config: RepoConfig) -> Self {
        info!(
            "event=repo_init module=repo status=ok backend=local api_base_configured={}",
            config.api_base().is_some()
        );
        Self {
            store,
            clock,
            config,
        }
    }

    /// Returns the injected clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the configured API base, if any. Reserved; never dialed.
    pub fn api_base(&self) -> Option<&str> {
        self.config.api_base()
    }

    /// Lists notes, most recently updated first, optionally filtered by a
    /// case-insensitive title/content substring query.
    pub fn list(&self, query: Option<&str>) -> Vec<Note> {
        let mut notes = self.store.read_all();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        filter_notes(notes, query)
    }

    /// Returns the note with `id`, or `None` when absent.
    pub fn get(&self, id: &str) -> Option<Note> {
        self.store.read_all().into_iter().find(|note| note.id == id)
    }

    /// Creates a note and prepends it to the collection.
    ///
    /// The title is trimmed and a blank one falls back to the default
    /// placeholder, so every stored record has a usable title.
    pub fn create(&self, input: CreateNoteInput) -> Note {
        let now_ms = self.clock.now_ms();
        let title = input
            .title
            .as_deref()
            .map(str::trim)
            .filter(|trimmed| !trimmed.is_empty())
            .unwrap_or(DEFAULT_NOTE_TITLE);
        let note = Note::new(title, input.content.unwrap_or_default(), now_ms);

        let mut notes = self.store.read_all();
        notes.insert(0, note.clone());
        self.store.write_all(&notes);
        note
    }

    /// Merges `patch` over the note with `id` and bumps `updated_at`.
    ///
    /// Returns `None` without side effects when the id is unknown. An
    /// empty patch still bumps `updated_at` and persists.
    pub fn update(&self, id: &str, patch: NotePatch) -> Option<Note> {
        let mut notes = self.store.read_all();
        let slot = notes.iter_mut().find(|note| note.id == id)?;

        if let Some(title) = patch.title {
            slot.title = title;
        }
        if let Some(content) = patch.content {
            slot.content = content;
        }
        slot.updated_at = self.clock.now_ms();
        let updated = slot.clone();

        self.store.write_all(&notes);
        Some(updated)
    }

    /// Removes the note with `id`; returns whether a record was removed.
    ///
    /// The surviving collection is written back either way, so a miss
    /// rewrites the slot with unchanged contents.
    pub fn remove(&self, id: &str) -> bool {
        let notes = self.store.read_all();
        let before = notes.len();
        let remaining: Vec<Note> = notes.into_iter().filter(|note| note.id != id).collect();
        let removed = remaining.len() != before;
        self.store.write_all(&remaining);
        removed
    }
}
