//! # Virtual Indexes
//!
//! Notes are never addressed by their storage id. Callers use a *virtual
//! index*: the 1-based rank of a note when all current notes are sorted by
//! storage id ascending.
//!
//! ```text
//!   storage ids   3   7   8   12
//!   virtual       1   2   3   4
//! ```
//!
//! Deleting the note at 7 leaves ids `3 8 12`, which rank as `1 2 3`. Nothing
//! is renumbered on disk; the ranking is simply computed again on the next
//! operation. For that reason a virtual index is only meaningful for the
//! snapshot that produced it and must never be persisted or cached.
//!
//! The SQLite backend computes the same ranking with a `ROW_NUMBER()` window;
//! [`index_notes`] is the in-process version used by the memory backend and
//! is the reference both are tested against.

use crate::model::Note;
use serde::Serialize;

/// A note paired with the virtual index it had in the snapshot it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNote {
    pub index: usize,
    #[serde(flatten)]
    pub note: Note,
}

impl DisplayNote {
    pub fn new(index: usize, note: Note) -> Self {
        Self { index, note }
    }
}

/// Ranks notes by ascending storage id and assigns indexes `1..=N`.
pub fn index_notes(mut notes: Vec<Note>) -> Vec<DisplayNote> {
    notes.sort_by_key(|n| n.id);
    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote::new(i + 1, note))
        .collect()
}

/// Picks the note at virtual index `index` from a freshly ranked snapshot.
///
/// Index 0 is never valid; it is not a "list all" sentinel.
pub fn select(indexed: &[DisplayNote], index: usize) -> Option<&DisplayNote> {
    if index == 0 {
        return None;
    }
    indexed.get(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(ids: &[i64]) -> Vec<Note> {
        ids.iter()
            .map(|id| Note::new(*id, format!("note {}", id)))
            .collect()
    }

    #[test]
    fn ranks_by_storage_id_not_input_order() {
        let indexed = index_notes(notes(&[12, 3, 8]));

        let pairs: Vec<_> = indexed.iter().map(|dp| (dp.index, dp.note.id)).collect();
        assert_eq!(pairs, vec![(1, 3), (2, 8), (3, 12)]);
    }

    #[test]
    fn gaps_in_storage_ids_do_not_leak_into_indexes() {
        let indexed = index_notes(notes(&[2, 40, 41, 900]));
        let indexes: Vec<_> = indexed.iter().map(|dp| dp.index).collect();
        assert_eq!(indexes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_input_yields_empty_index() {
        assert!(index_notes(Vec::new()).is_empty());
    }

    #[test]
    fn select_bounds() {
        let indexed = index_notes(notes(&[5, 9]));

        assert!(select(&indexed, 0).is_none());
        assert_eq!(select(&indexed, 1).map(|dp| dp.note.id), Some(5));
        assert_eq!(select(&indexed, 2).map(|dp| dp.note.id), Some(9));
        assert!(select(&indexed, 3).is_none());
    }

    #[test]
    fn serializes_index_and_content_only() {
        let dp = DisplayNote::new(2, Note::new(17, "milk"));
        let json = serde_json::to_string(&dp).unwrap();
        assert_eq!(json, r#"{"index":2,"content":"milk"}"#);
    }
}
