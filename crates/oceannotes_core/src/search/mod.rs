//! Query filtering over the note collection.
//!
//! # Responsibility
//! - Normalize user queries and decide which notes match.
//! - Keep the match rule identical for every rendering layer.

pub mod filter;
