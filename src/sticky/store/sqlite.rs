//! SQLite-backed note storage.
//!
//! One file, one table:
//!
//! ```text
//! notes(id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT, note TEXT)
//! ```
//!
//! `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted newest
//! row again. Files created by older versions without it open fine; ranking
//! only needs ids to be unique and ordered.
//!
//! Every index-addressed operation is a single statement: the ranking window
//! and the read (or the `DELETE ... RETURNING`) see the same snapshot.

use super::NoteStore;
use crate::error::{Result, StickyError};
use crate::index::DisplayNote;
use crate::model::Note;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    note TEXT
);
";

const LIST_NOTES: &str = "
SELECT ROW_NUMBER() OVER (ORDER BY id) AS virtual_index, id, note
FROM notes
ORDER BY id
";

const GET_NOTE: &str = "
WITH ordered_notes AS (
    SELECT ROW_NUMBER() OVER (ORDER BY id) AS virtual_index, id, note
    FROM notes
)
SELECT virtual_index, id, note
FROM ordered_notes
WHERE virtual_index = ?1
";

const DELETE_NOTE: &str = "
WITH ordered_notes AS (
    SELECT id, ROW_NUMBER() OVER (ORDER BY id) AS virtual_index
    FROM notes
)
DELETE FROM notes
WHERE id = (SELECT id FROM ordered_notes WHERE virtual_index = ?1)
RETURNING id, note
";

pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
    created: bool,
}

impl SqliteStore {
    /// Open the database at `path`, creating parent directories, the file and
    /// the `notes` table as needed. Safe to call on an existing database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let created = !path.exists();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(dir = %parent.display(), "Creating data directory");
                fs::create_dir_all(parent).map_err(|source| StickyError::Filesystem {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let conn = Connection::open(&path).map_err(|source| StickyError::Storage {
            path: path.clone(),
            source,
        })?;
        conn.execute_batch(SCHEMA)
            .map_err(|source| StickyError::Storage {
                path: path.clone(),
                source,
            })?;

        if created {
            info!(path = %path.display(), "Created notes database");
        } else {
            debug!(path = %path.display(), "Opened notes database");
        }

        Ok(Self {
            conn,
            path,
            created,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether [`SqliteStore::open`] had to create the database file.
    pub fn was_created(&self) -> bool {
        self.created
    }

    fn storage_err(&self, source: rusqlite::Error) -> StickyError {
        StickyError::Storage {
            path: self.path.clone(),
            source,
        }
    }
}

fn ranked_note(row: &Row<'_>) -> rusqlite::Result<DisplayNote> {
    let index: i64 = row.get(0)?;
    let id: i64 = row.get(1)?;
    let content: Option<String> = row.get(2)?;
    Ok(DisplayNote::new(
        index as usize,
        Note::new(id, content.unwrap_or_default()),
    ))
}

/// Virtual indexes start at 1 and can't exceed the row count, which fits in
/// an i64. Anything else can never match.
fn sql_index(index: usize) -> Option<i64> {
    if index == 0 {
        return None;
    }
    i64::try_from(index).ok()
}

impl NoteStore for SqliteStore {
    fn add(&mut self, content: &str) -> Result<DisplayNote> {
        let path = &self.path;
        let storage_err = |source: rusqlite::Error| StickyError::Storage {
            path: path.clone(),
            source,
        };

        let tx = self.conn.transaction().map_err(storage_err)?;
        tx.execute("INSERT INTO notes (note) VALUES (?1)", params![content])
            .map_err(storage_err)?;
        let id = tx.last_insert_rowid();
        // The new id is the largest, so its rank is the row count.
        let count: i64 = tx
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
            .map_err(storage_err)?;
        tx.commit().map_err(storage_err)?;

        debug!(id, index = count, "Added note");
        Ok(DisplayNote::new(count as usize, Note::new(id, content)))
    }

    fn list(&self) -> Result<Vec<DisplayNote>> {
        let mut stmt = self
            .conn
            .prepare(LIST_NOTES)
            .map_err(|e| self.storage_err(e))?;
        let rows = stmt
            .query_map([], ranked_note)
            .map_err(|e| self.storage_err(e))?;

        let notes = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| self.storage_err(e))?;
        Ok(notes)
    }

    fn get_by_index(&self, index: usize) -> Result<DisplayNote> {
        let Some(key) = sql_index(index) else {
            return Err(StickyError::NotFound(index));
        };

        self.conn
            .query_row(GET_NOTE, params![key], ranked_note)
            .optional()
            .map_err(|e| self.storage_err(e))?
            .ok_or(StickyError::NotFound(index))
    }

    fn delete_by_index(&mut self, index: usize) -> Result<DisplayNote> {
        let Some(key) = sql_index(index) else {
            return Err(StickyError::NotFound(index));
        };

        let deleted = self
            .conn
            .query_row(DELETE_NOTE, params![key], |row| {
                let id: i64 = row.get(0)?;
                let content: Option<String> = row.get(1)?;
                Ok(Note::new(id, content.unwrap_or_default()))
            })
            .optional()
            .map_err(|e| self.storage_err(e))?
            .ok_or(StickyError::NotFound(index))?;

        debug!(id = deleted.id, index, "Deleted note");
        Ok(DisplayNote::new(index, deleted))
    }

    fn purge(self) -> Result<()> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, source)| StickyError::Storage {
                path: path.clone(),
                source,
            })?;

        fs::remove_file(&path).map_err(|source| StickyError::Filesystem {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "Removed notes database");
        Ok(())
    }
}
