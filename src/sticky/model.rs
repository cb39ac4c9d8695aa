use serde::Serialize;

/// Backend-assigned storage identifier. Strictly increasing, never reused,
/// and never used to address notes from the outside.
pub type NoteId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    #[serde(skip)]
    pub id: NoteId,
    pub content: String,
}

impl Note {
    pub fn new(id: NoteId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}
