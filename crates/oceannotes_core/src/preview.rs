//! Display projections shared by rendering layers.
//!
//! # Responsibility
//! - Derive list snippets and relative "updated" labels from note fields.
//! - Keep the fallback strings in one place so every renderer agrees.

use crate::model::note::Note;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum characters kept in a list snippet.
const SNIPPET_MAX_CHARS: usize = 100;

/// Title shown for notes whose stored title is blank.
pub const UNTITLED_LABEL: &str = "Untitled";

/// Snippet shown for notes with no content.
pub const EMPTY_CONTENT_LABEL: &str = "No content";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Returns the display title: the stored title, or the untitled fallback.
pub fn display_title(note: &Note) -> &str {
    if note.title.is_empty() {
        UNTITLED_LABEL
    } else {
        note.title.as_str()
    }
}

/// Derives the one-line list snippet: whitespace-normalized content capped
/// at a fixed length, or the no-content fallback.
pub fn note_snippet(note: &Note) -> String {
    let normalized = WHITESPACE_RE.replace_all(note.content.as_str(), " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return EMPTY_CONTENT_LABEL.to_string();
    }
    trimmed.chars().take(SNIPPET_MAX_CHARS).collect()
}

/// Formats `updated_at_ms` relative to `now_ms`, coarsest unit that fits.
/// Timestamps in the future read as "just now".
pub fn relative_updated_at(updated_at_ms: i64, now_ms: i64) -> String {
    let delta_s = (now_ms - updated_at_ms) / 1000;
    if delta_s < 5 {
        return "just now".to_string();
    }
    if delta_s < 60 {
        return format!("{delta_s}s ago");
    }
    let minutes = delta_s / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    format!("{days}d ago")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str) -> Note {
        Note::new(title, content, 1_000)
    }

    #[test]
    fn blank_title_falls_back_to_untitled() {
        assert_eq!(display_title(&note("", "x")), UNTITLED_LABEL);
        assert_eq!(display_title(&note("Groceries", "x")), "Groceries");
    }

    #[test]
    fn snippet_collapses_whitespace_and_caps_length() {
        let long = "word ".repeat(60);
        let snippet = note_snippet(&note("t", &long));
        assert_eq!(snippet.chars().count(), 100);
        assert!(snippet.starts_with("word word"));

        assert_eq!(
            note_snippet(&note("t", "line one\n\n\tline   two")),
            "line one line two"
        );
    }

    #[test]
    fn empty_content_gets_fallback_snippet() {
        assert_eq!(note_snippet(&note("t", "")), EMPTY_CONTENT_LABEL);
        assert_eq!(note_snippet(&note("t", " \n\t ")), EMPTY_CONTENT_LABEL);
    }

    #[test]
    fn relative_label_picks_coarsest_unit() {
        let now = 1_700_000_000_000;
        assert_eq!(relative_updated_at(now, now), "just now");
        assert_eq!(relative_updated_at(now - 30_000, now), "30s ago");
        assert_eq!(relative_updated_at(now - 5 * 60_000, now), "5m ago");
        assert_eq!(relative_updated_at(now - 3 * 3_600_000, now), "3h ago");
        assert_eq!(relative_updated_at(now - 2 * 86_400_000, now), "2d ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = 1_700_000_000_000;
        assert_eq!(relative_updated_at(now + 60_000, now), "just now");
    }
}
