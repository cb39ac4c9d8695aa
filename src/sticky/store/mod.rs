//! # Storage Layer
//!
//! The [`NoteStore`] trait is the whole contract between the note operations and
//! the durable backend. Every method that takes a virtual index resolves it
//! against the backend's *current* contents, inside the same statement or
//! transaction that reads or mutates the note. No implementation may cache
//! indexes between calls.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage, one SQLite file with a single
//!   `notes` table. Ranking is done by the database with a window function.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. Ranking is done
//!   with [`crate::index::index_notes`].
//!
//! Both run the same conformance suite (see `conformance` below), so the
//! command layer can be tested against the memory store with confidence.

use crate::error::Result;
use crate::index::DisplayNote;

pub mod memory;
pub mod sqlite;

pub trait NoteStore {
    /// Append a note. Its storage id is greater than every id ever handed out,
    /// so it always lands at the highest virtual index.
    fn add(&mut self, content: &str) -> Result<DisplayNote>;

    /// All notes, ranked `1..=N` by ascending storage id.
    fn list(&self) -> Result<Vec<DisplayNote>>;

    /// The note at virtual index `index`, or `StickyError::NotFound`.
    fn get_by_index(&self, index: usize) -> Result<DisplayNote>;

    /// Delete the note at virtual index `index` and return it as it was ranked
    /// just before deletion.
    fn delete_by_index(&mut self, index: usize) -> Result<DisplayNote>;

    /// Destroy the container itself. The handle is consumed.
    fn purge(self) -> Result<()>
    where
        Self: Sized;
}
