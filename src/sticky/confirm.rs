//! Confirmation gate for purging the whole database.
//!
//! [`decide`] is a pure mapping from the user's answer to a [`Decision`].
//! [`prompt`] does the I/O around it with injected reader and writer, so the
//! CLI passes stdin/stdout and tests pass byte buffers.

use crate::error::{Result, StickyError};
use std::io::{BufRead, Write};

/// The only answer that lets a purge proceed. Case-sensitive.
pub const AFFIRMATIVE: &str = "y";

pub const WARNING: &str = "This operation will delete your entire notes database.";
pub const INSTRUCTIONS: &str = "Type \"y\" to proceed, type anything else to cancel.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Cancel,
}

/// Anything other than exactly [`AFFIRMATIVE`] cancels, including empty input.
pub fn decide(answer: &str) -> Decision {
    if answer == AFFIRMATIVE {
        Decision::Proceed
    } else {
        Decision::Cancel
    }
}

/// Reads one line from `input` and decides on it.
///
/// The warning itself is the caller's to print; this only writes the `> `
/// marker. A closed stream is an error, never a silent answer either way.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Decision> {
    write!(output, "> ").map_err(StickyError::Io)?;
    output.flush().map_err(StickyError::Io)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(StickyError::Input)?;
    if read == 0 {
        return Err(StickyError::InputClosed);
    }

    let answer = line.trim_end_matches(['\n', '\r']);
    Ok(decide(answer))
}
