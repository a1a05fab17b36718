//! Workspace state: one explicit snapshot per update.
//!
//! # Responsibility
//! - Drive the repository and editor session from view-level callbacks.
//! - Return a fresh immutable snapshot after every update so any rendering
//!   layer can redraw without reactive tracking.
//!
//! # Invariants
//! - Snapshots are plain data; mutating one never touches stored state.
//! - Deleting the selected note clears both the selection and the editor
//!   buffers.

use crate::clock::Clock;
use crate::model::note::{Note, NoteId};
use crate::repo::notes_repo::{CreateNoteInput, NotePatch, NotesRepository};
use crate::session::editor::{EditorSession, SaveRequest};
use crate::store::NoteStore;

/// Immutable view of the workspace after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    /// Notes under the active query, most recently updated first.
    pub notes: Vec<Note>,
    /// Currently selected note id, if any.
    pub selected_id: Option<NoteId>,
    /// Active search query, verbatim as typed.
    pub query: String,
}

/// Stateful composition of repository and editor session.
pub struct Workspace<S: NoteStore, C: Clock> {
    repo: NotesRepository<S, C>,
    editor: EditorSession,
    selected_id: Option<NoteId>,
    query: String,
}

impl<S: NoteStore, C: Clock> Workspace<S, C> {
    /// Creates a workspace over an explicitly constructed repository.
    pub fn new(repo: NotesRepository<S, C>) -> Self {
        Self {
            repo,
            editor: EditorSession::new(),
            selected_id: None,
            query: String::new(),
        }
    }

    /// Returns the underlying repository.
    pub fn repo(&self) -> &NotesRepository<S, C> {
        &self.repo
    }

    /// Returns the editor session.
    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    /// Enables or disables the editor's scheduled-save path.
    pub fn set_autosave_enabled(&mut self, enabled: bool) {
        self.editor.set_autosave_enabled(enabled);
    }

    /// Takes a snapshot of the current state without changing anything.
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            notes: self.repo.list(Some(self.query.as_str())),
            selected_id: self.selected_id.clone(),
            query: self.query.clone(),
        }
    }

    /// Selects `id` and loads it into the editor; unknown ids clear the
    /// selection.
    pub fn select(&mut self, id: &str) -> WorkspaceSnapshot {
        match self.repo.get(id) {
            Some(note) => {
                self.selected_id = Some(note.id.clone());
                self.editor.open_note(&note);
            }
            None => {
                self.selected_id = None;
                self.editor.close();
            }
        }
        self.snapshot()
    }

    /// Creates an empty note, selects it and opens it for editing.
    pub fn create_note(&mut self) -> WorkspaceSnapshot {
        let note = self.repo.create(CreateNoteInput::default());
        self.selected_id = Some(note.id.clone());
        self.editor.open_note(&note);
        self.snapshot()
    }

    /// Updates the active query; the selection is untouched.
    pub fn search(&mut self, query: impl Into<String>) -> WorkspaceSnapshot {
        self.query = query.into();
        self.snapshot()
    }

    /// Applies a title edit through the debounced editor.
    pub fn edit_title(&mut self, value: impl Into<String>) -> WorkspaceSnapshot {
        let now_ms = self.repo.clock().now_ms();
        self.editor.edit_title(value, now_ms);
        self.snapshot()
    }

    /// Applies a content edit through the debounced editor.
    pub fn edit_content(&mut self, value: impl Into<String>) -> WorkspaceSnapshot {
        let now_ms = self.repo.clock().now_ms();
        self.editor.edit_content(value, now_ms);
        self.snapshot()
    }

    /// Saves the editor buffers immediately, bypassing the debounce.
    pub fn save(&mut self) -> WorkspaceSnapshot {
        if let Some(request) = self.editor.manual_save() {
            self.apply_save(request);
        }
        self.snapshot()
    }

    /// Fires a due scheduled save, if any. Hosts call this from their
    /// timer or event loop; nothing fires implicitly.
    pub fn tick(&mut self) -> WorkspaceSnapshot {
        let now_ms = self.repo.clock().now_ms();
        if let Some(request) = self.editor.poll(now_ms) {
            self.apply_save(request);
        }
        self.snapshot()
    }

    /// Deletes the selected note, clearing the selection and the editor.
    ///
    /// Confirmation of the destructive action belongs to the rendering
    /// layer; by the time this runs the user already answered.
    pub fn delete_selected(&mut self) -> WorkspaceSnapshot {
        if let Some(id) = self.selected_id.take() {
            self.repo.remove(&id);
            self.editor.close();
        }
        self.snapshot()
    }

    fn apply_save(&mut self, request: SaveRequest) {
        self.repo.update(
            &request.note_id,
            NotePatch {
                title: Some(request.title),
                content: Some(request.content),
            },
        );
    }
}
