use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StickyError {
    /// The database could not be opened, bootstrapped, queried or written.
    #[error("Storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The filesystem around the database could not be prepared or removed.
    #[error("Storage error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Note not found: no note at index {0}")]
    NotFound(usize),

    #[error("Could not read confirmation: {0}")]
    Input(#[source] std::io::Error),

    #[error("Could not read confirmation: input stream closed")]
    InputClosed,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StickyError {
    /// True for failures of the durable backend, as opposed to a missing note
    /// or an aborted prompt.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            StickyError::Storage { .. } | StickyError::Filesystem { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StickyError>;
