use super::NoteStore;
use crate::error::{Result, StickyError};
use crate::index::{index_notes, select, DisplayNote};
use crate::model::{Note, NoteId};
use std::collections::BTreeMap;

/// In-memory storage backend for testing.
///
/// Ids come from a counter that only moves forward, mirroring SQLite's
/// `AUTOINCREMENT`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: BTreeMap<NoteId, String>,
    last_id: NoteId,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> Vec<DisplayNote> {
        index_notes(
            self.notes
                .iter()
                .map(|(id, content)| Note::new(*id, content.clone()))
                .collect(),
        )
    }
}

impl NoteStore for InMemoryStore {
    fn add(&mut self, content: &str) -> Result<DisplayNote> {
        self.last_id += 1;
        self.notes.insert(self.last_id, content.to_string());
        Ok(DisplayNote::new(
            self.notes.len(),
            Note::new(self.last_id, content),
        ))
    }

    fn list(&self) -> Result<Vec<DisplayNote>> {
        Ok(self.snapshot())
    }

    fn get_by_index(&self, index: usize) -> Result<DisplayNote> {
        let indexed = self.snapshot();
        select(&indexed, index)
            .cloned()
            .ok_or(StickyError::NotFound(index))
    }

    fn delete_by_index(&mut self, index: usize) -> Result<DisplayNote> {
        let target = self.get_by_index(index)?;
        self.notes.remove(&target.note.id);
        Ok(target)
    }

    fn purge(self) -> Result<()> {
        Ok(())
    }
}
