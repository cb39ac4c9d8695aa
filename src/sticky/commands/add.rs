use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &mut S, content: &str) -> Result<CmdResult> {
    let added = store.add(content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully added note #{}",
        added.index
    )));
    Ok(result.with_affected_notes(vec![added]))
}
