//! Case-insensitive substring filtering.
//!
//! # Invariants
//! - Blank or whitespace-only queries mean "no filter".
//! - A note matches when its title or its content contains the query,
//!   compared case-insensitively.

use crate::model::note::Note;

/// Normalizes a raw query: trims and lowercases, blank becomes `None`.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Returns whether one note matches an already-normalized needle.
pub fn note_matches(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle) || note.content.to_lowercase().contains(needle)
}

/// Keeps only the notes matching `query`; blank queries keep everything.
pub fn filter_notes(notes: Vec<Note>, query: Option<&str>) -> Vec<Note> {
    let Some(needle) = query.and_then(normalize_query) else {
        return notes;
    };
    notes
        .into_iter()
        .filter(|note| note_matches(note, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str) -> Note {
        Note::new(title, content, 1_000)
    }

    #[test]
    fn blank_queries_are_no_filter() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);

        let notes = vec![note("A", ""), note("B", "")];
        assert_eq!(filter_notes(notes.clone(), None).len(), 2);
        assert_eq!(filter_notes(notes, Some("  ")).len(), 2);
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        assert_eq!(normalize_query("  Milk "), Some("milk".to_string()));
    }

    #[test]
    fn matches_title_or_content_case_insensitively() {
        let groceries = note("Groceries", "Milk and eggs");
        assert!(note_matches(&groceries, "grocer"));
        assert!(note_matches(&groceries, "milk"));
        assert!(!note_matches(&groceries, "bread"));

        let kept = filter_notes(
            vec![note("Groceries", "Milk and eggs"), note("Work", "Standup at 9")],
            Some("MILK"),
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Groceries");
    }

    #[test]
    fn filter_preserves_input_order() {
        let kept = filter_notes(
            vec![note("first", "x"), note("second", "x"), note("third", "y")],
            Some("x"),
        );
        let titles: Vec<&str> = kept.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }
}
