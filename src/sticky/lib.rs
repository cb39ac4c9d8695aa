//! # Sticky Architecture
//!
//! Sticky is a small note store with a CLI in front of it. Notes live in one
//! SQLite table and are addressed by a *virtual index* (their rank by storage
//! id) instead of by the id itself, so the numbers a user sees are always
//! `1..N` no matter how many notes were deleted before.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints, exit codes    │
//! │  - Runs the purge confirmation prompt on the terminal       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store handle         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait                                          │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! The confirmation gate in [`confirm`] sits beside the layers: it is a pure
//! decision plus a prompt over injected reader/writer, and the CLI hands its
//! [`confirm::Decision`] to the API.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage trait and backends
//! - [`index`]: Virtual index ranking
//! - [`model`]: `Note` and `NoteId`
//! - [`confirm`]: Purge confirmation gate
//! - [`config`]: Database location resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
