//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the store handle for the lifetime of one invocation:
//! dropping the API releases the handle, and [`StickyApi::purge`] consumes it.
//!
//! `StickyApi<S: NoteStore>` is generic over the backend:
//! - Production: `StickyApi<SqliteStore>`
//! - Testing: `StickyApi<InMemoryStore>`

use crate::commands;
use crate::confirm::Decision;
use crate::error::Result;
use crate::store::NoteStore;

pub struct StickyApi<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> StickyApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_note(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, content)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_note(&self, index: usize) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, index)
    }

    pub fn delete_note(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, index)
    }

    /// Purge is only as interactive as the caller makes it: pass the result of
    /// [`crate::confirm::prompt`], or `Decision::Proceed` to skip the gate.
    pub fn purge(self, decision: Decision) -> Result<commands::CmdResult> {
        commands::purge::run(self.store, decision)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
