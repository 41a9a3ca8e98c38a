use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EntryId;
use crate::store::EntryStore;

/// Sets the completion flag to `completed` (not a flip: the checkbox state wins).
pub fn run(store: &mut EntryStore, id: &EntryId, completed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !store.set_completed(id, completed) {
        return Ok(result);
    }

    let entry = store.require(id)?;
    let verb = if completed { "Completed" } else { "Reopened" };
    result.add_message(CmdMessage::success(format!("{}: {}", verb, entry.name)));
    result.affected_entries.push(entry.clone());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    #[test]
    fn sets_and_clears_flag() {
        let mut store = EntryStore::from_entries(vec![Entry::new("a".into(), "Apples")]);

        run(&mut store, &"a".into(), true).unwrap();
        assert!(store.get(&"a".into()).unwrap().completed);

        run(&mut store, &"a".into(), false).unwrap();
        assert!(!store.get(&"a".into()).unwrap().completed);
    }

    #[test]
    fn setting_same_value_is_stable() {
        let mut store =
            EntryStore::from_entries(vec![Entry::new("a".into(), "Apples").with_completed(true)]);
        let result = run(&mut store, &"a".into(), true).unwrap();
        assert!(store.get(&"a".into()).unwrap().completed);
        assert_eq!(result.affected_entries.len(), 1);
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut store = EntryStore::from_entries(vec![Entry::new("a".into(), "Apples")]);
        let result = run(&mut store, &"x".into(), true).unwrap();
        assert!(result.is_noop());
        assert!(!store.get(&"a".into()).unwrap().completed);
    }
}
