use super::setup::OutputFormat;
use colored::Colorize;
use sticky::api::{CmdMessage, MessageLevel};
use sticky::error::Result;
use sticky::index::DisplayNote;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_notes(notes: &[DisplayNote], format: OutputFormat) -> Result<()> {
    print!("{}", render_notes(notes, format)?);
    Ok(())
}

pub(super) fn print_note(note: &DisplayNote, format: OutputFormat) -> Result<()> {
    print!("{}", render_note(note, format)?);
    Ok(())
}

/// One `<index> <content>` line per note, ascending, or a JSON array.
pub(super) fn render_notes(notes: &[DisplayNote], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(notes.iter().map(text_line).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(notes)?)),
    }
}

pub(super) fn render_note(note: &DisplayNote, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text_line(note)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(note)?)),
    }
}

fn text_line(dp: &DisplayNote) -> String {
    format!("{} {}\n", dp.index, dp.note.content)
}
