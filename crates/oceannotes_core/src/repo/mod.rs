//! Repository layer over the storage slot.
//!
//! # Responsibility
//! - Provide the complete CRUD surface for notes.
//! - Keep persistence, time and configuration behind explicit constructor
//!   inputs so hosts and tests choose their own.
//!
//! # Invariants
//! - Operations never fail: storage trouble degrades to empty or unchanged
//!   state inside the store layer.
//! - `list` output is ordered by `updated_at` descending.

pub mod notes_repo;
