//! oceannotes_core: domain logic for the Ocean Notes app.
//!
//! The crate owns note CRUD over a single JSON storage slot plus the
//! autosave and workspace snapshot layers above it. Rendering front ends
//! (the bundled CLI, a future GUI shell) stay outside and drive it through
//! [`Workspace`] or [`NotesRepository`] directly.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod preview;
pub mod repo;
pub mod search;
pub mod session;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::RepoConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{new_note_id, Note, NoteId, DEFAULT_NOTE_TITLE};
pub use repo::notes_repo::{CreateNoteInput, NotePatch, NotesRepository};
pub use session::editor::{AutosaveState, EditorSession, SaveRequest, AUTOSAVE_DELAY_MS};
pub use session::workspace::{Workspace, WorkspaceSnapshot};
pub use store::{JsonFileStore, MemoryStore, NoteStore, StoreError, StoreResult, DEFAULT_SLOT_FILE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
