use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &mut S, index: usize) -> Result<CmdResult> {
    let deleted = store.delete_by_index(index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully deleted note #{}",
        deleted.index
    )));
    Ok(result.with_affected_notes(vec![deleted]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list};
    use crate::error::StickyError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_exactly_the_ranked_note() {
        let mut store = InMemoryStore::new();
        for c in ["a", "b", "c"] {
            add::run(&mut store, c).unwrap();
        }

        let result = run(&mut store, 2).unwrap();
        assert_eq!(result.affected_notes[0].note.content, "b");
        assert_eq!(result.messages[0].content, "Successfully deleted note #2");

        let remaining: Vec<_> = list::run(&store)
            .unwrap()
            .listed_notes
            .into_iter()
            .map(|dp| dp.note.content)
            .collect();
        assert_eq!(remaining, vec!["a", "c"]);
    }

    #[test]
    fn out_of_range_leaves_store_untouched() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "a").unwrap();

        assert!(matches!(run(&mut store, 5), Err(StickyError::NotFound(5))));
        assert_eq!(list::run(&store).unwrap().listed_notes.len(), 1);
    }
}
