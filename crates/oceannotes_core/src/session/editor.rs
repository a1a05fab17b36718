//! Editor buffers and autosave debounce.
//!
//! # Responsibility
//! - Buffer the title and content being edited for one loaded note.
//! - Coalesce edit bursts into at most one scheduled save per window.
//!
//! # Invariants
//! - The debounce never reschedules: the first qualifying edit of a window
//!   fixes the deadline, later edits only change the buffers.
//! - A fired save carries the buffer values at fire time, not at schedule
//!   time.
//! - Manual saves bypass the window and leave a pending deadline in place.

use crate::model::note::{Note, NoteId};

/// Fixed delay between a qualifying edit and its scheduled save.
pub const AUTOSAVE_DELAY_MS: i64 = 600;

/// Debounce machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosaveState {
    /// No save is scheduled.
    Idle,
    /// One save is scheduled to fire at `due_at_ms`.
    Pending { due_at_ms: i64 },
}

/// Save payload emitted by the session. The caller applies it through the
/// repository's update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub note_id: NoteId,
    pub title: String,
    pub content: String,
}

/// Editing session for at most one loaded note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    note_id: Option<NoteId>,
    title: String,
    content: String,
    autosave_enabled: bool,
    delay_ms: i64,
    debounce: AutosaveState,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Creates an empty session with autosave enabled.
    pub fn new() -> Self {
        Self {
            note_id: None,
            title: String::new(),
            content: String::new(),
            autosave_enabled: true,
            delay_ms: AUTOSAVE_DELAY_MS,
            debounce: AutosaveState::Idle,
        }
    }

    /// Creates a session with a custom debounce window.
    pub fn with_delay_ms(delay_ms: i64) -> Self {
        Self {
            delay_ms,
            ..Self::new()
        }
    }

    /// Loads `note` into the buffers.
    ///
    /// A pending window survives note switches; when it fires it saves the
    /// newly loaded note with the then-current buffers.
    pub fn open_note(&mut self, note: &Note) {
        self.note_id = Some(note.id.clone());
        self.title = note.title.clone();
        self.content = note.content.clone();
    }

    /// Unloads the current note and clears the buffers.
    pub fn close(&mut self) {
        self.note_id = None;
        self.title.clear();
        self.content.clear();
    }

    /// Enables or disables the scheduled-save path. Manual saves are not
    /// affected.
    pub fn set_autosave_enabled(&mut self, enabled: bool) {
        self.autosave_enabled = enabled;
    }

    /// Id of the loaded note, if any.
    pub fn note_id(&self) -> Option<&str> {
        self.note_id.as_deref()
    }

    /// Current title buffer.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current content buffer.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Current debounce state.
    pub fn debounce(&self) -> AutosaveState {
        self.debounce
    }

    /// Records a title edit at `now_ms`, scheduling a save when idle.
    /// Unchanged values do not qualify.
    pub fn edit_title(&mut self, value: impl Into<String>, now_ms: i64) {
        let value = value.into();
        if value == self.title {
            return;
        }
        self.title = value;
        self.schedule(now_ms);
    }

    /// Records a content edit at `now_ms`, scheduling a save when idle.
    /// Unchanged values do not qualify.
    pub fn edit_content(&mut self, value: impl Into<String>, now_ms: i64) {
        let value = value.into();
        if value == self.content {
            return;
        }
        self.content = value;
        self.schedule(now_ms);
    }

    /// Emits the save due at `now_ms`, if any, returning the machine to
    /// idle. Fires with the current buffers even when they changed after
    /// scheduling, and fires nothing when the note was unloaded meanwhile.
    pub fn poll(&mut self, now_ms: i64) -> Option<SaveRequest> {
        match self.debounce {
            AutosaveState::Pending { due_at_ms } if now_ms >= due_at_ms => {
                self.debounce = AutosaveState::Idle;
                self.save_request()
            }
            _ => None,
        }
    }

    /// Emits an immediate save of the current buffers, skipping the
    /// debounce. A pending window stays scheduled and will still fire.
    /// Returns `None` when no note is loaded.
    pub fn manual_save(&self) -> Option<SaveRequest> {
        self.save_request()
    }

    fn schedule(&mut self, now_ms: i64) {
        if !self.autosave_enabled || self.note_id.is_none() {
            return;
        }
        if let AutosaveState::Pending { .. } = self.debounce {
            return;
        }
        self.debounce = AutosaveState::Pending {
            due_at_ms: now_ms + self.delay_ms,
        };
    }

    fn save_request(&self) -> Option<SaveRequest> {
        let note_id = self.note_id.clone()?;
        Some(SaveRequest {
            note_id,
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }
}
