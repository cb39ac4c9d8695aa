//! # CLI Layer
//!
//! The only place that knows about the terminal: argument parsing, logging
//! setup, printing, and the interactive purge prompt.
//!
//! ## Structure
//!
//! - `run()`: parse, set up logging, dispatch (called by `main.rs`)
//! - `init_context()`: resolve the database location and open the store
//! - `handle_*()`: per-command handlers that call the API and print
//!
//! The store handle lives in `AppContext` and is dropped when `run()` returns,
//! on success and on every error path, before `main` exits the process.

use super::print::{print_messages, print_note, print_notes};
use super::setup::{Cli, Commands, OutputFormat};
use clap::Parser;
use colored::Colorize;
use sticky::api::StickyApi;
use sticky::config::{StickyConfig, ENV_LOG};
use sticky::confirm::{self, Decision};
use sticky::error::Result;
use sticky::store::sqlite::SqliteStore;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: StickyApi<SqliteStore>,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = StickyConfig::from_env()?;
    debug!(path = %config.db_path.display(), source = ?config.source, "Resolved database location");

    let command = cli.command.unwrap_or(Commands::List);

    // Opening the store would create the file, which `path` must not do.
    if command == Commands::Path {
        return handle_path(&config);
    }

    let mut ctx = init_context(&config, cli.output)?;

    match command {
        Commands::Add { content } => handle_add(&mut ctx, content.join(" ")),
        Commands::List => handle_list(&ctx),
        Commands::Get { index } => handle_get(&ctx, index),
        Commands::Delete { index } => handle_delete(&mut ctx, index),
        Commands::Purge { yes } => handle_purge(ctx, yes),
        Commands::Path => handle_path(&config),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "sticky=debug" } else { "sticky=warn" };
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(config: &StickyConfig, output: OutputFormat) -> Result<AppContext> {
    let store = SqliteStore::open(&config.db_path)?;

    if store.was_created() {
        eprintln!(
            "{}",
            format!("Created notes database at: {}", store.path().display()).blue()
        );
    }

    Ok(AppContext {
        api: StickyApi::new(store),
        output,
    })
}

fn handle_path(config: &StickyConfig) -> Result<()> {
    println!("{}", config.db_path.display());
    Ok(())
}

fn handle_add(ctx: &mut AppContext, content: String) -> Result<()> {
    let result = ctx.api.add_note(&content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_notes(&result.listed_notes, ctx.output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, index: usize) -> Result<()> {
    let result = ctx.api.get_note(index)?;
    for dp in &result.listed_notes {
        print_note(dp, ctx.output)?;
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize) -> Result<()> {
    let result = ctx.api.delete_note(index)?;
    print_messages(&result.messages);
    Ok(())
}

/// `--yes` skips the prompt entirely; that is the non-interactive path.
fn handle_purge(ctx: AppContext, yes: bool) -> Result<()> {
    let decision = if yes {
        Decision::Proceed
    } else {
        ask_purge_confirmation()?
    };

    let result = ctx.api.purge(decision)?;
    print_messages(&result.messages);
    Ok(())
}

fn ask_purge_confirmation() -> Result<Decision> {
    println!("{}", confirm::WARNING.red());
    println!("{}", confirm::INSTRUCTIONS);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    confirm::prompt(&mut input, &mut output).inspect_err(|_| {
        eprintln!("{}", "Purge aborted; the notes database was not touched.".yellow());
    })
}
