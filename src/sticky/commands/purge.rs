use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::Decision;
use crate::error::Result;
use crate::store::NoteStore;

/// Destroys the whole database when `decision` says so.
///
/// The store is taken by value either way: after a purge there is nothing
/// left to hold a handle to, and after a cancel the invocation is over.
pub fn run<S: NoteStore>(store: S, decision: Decision) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match decision {
        Decision::Proceed => {
            store.purge()?;
            result.add_message(CmdMessage::warning("Sticky notes database deleted."));
        }
        Decision::Cancel => {
            drop(store);
            result.add_message(CmdMessage::success("Sticky notes database preserved."));
        }
    }

    Ok(result)
}
