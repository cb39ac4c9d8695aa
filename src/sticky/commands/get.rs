use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S, index: usize) -> Result<CmdResult> {
    let note = store.get_by_index(index)?;
    Ok(CmdResult::default().with_listed_notes(vec![note]))
}
