use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S) -> Result<CmdResult> {
    let notes = store.list()?;
    Ok(CmdResult::default().with_listed_notes(notes))
}
