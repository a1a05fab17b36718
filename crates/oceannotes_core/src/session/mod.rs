//! Editing sessions and workspace state.
//!
//! # Responsibility
//! - Keep per-session state (edit buffers, debounce, selection, query) out
//!   of the repository, which stays stateless between calls.

pub mod editor;
pub mod workspace;
