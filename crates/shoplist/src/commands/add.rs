use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShoplistError};
use crate::ids::IdGenerator;
use crate::model::{is_valid_name, Entry};
use crate::store::EntryStore;

pub const INVALID_NAME_MESSAGE: &str = "Enter a valid item name";

/// Adds a new entry at the head of the list (most recent first).
pub fn run(store: &mut EntryStore, ids: &mut dyn IdGenerator, name: String) -> Result<CmdResult> {
    if !is_valid_name(&name) {
        return Err(ShoplistError::Validation(INVALID_NAME_MESSAGE.to_string()));
    }

    let entry = Entry::new(ids.next_id(), name);
    store.insert_at(0, entry.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added: {}", entry.name)));
    result.affected_entries.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn adds_at_head() {
        let mut store = EntryStore::new();
        let mut ids = SequentialIds::new("t");
        run(&mut store, &mut ids, "Eggs".into()).unwrap();
        run(&mut store, &mut ids, "Bread".into()).unwrap();

        let names: Vec<_> = store.all().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Eggs"]);
        assert_eq!(store.all()[0].id.as_str(), "t-2");
    }

    #[test]
    fn new_entry_is_incomplete() {
        let mut store = EntryStore::new();
        let result = run(&mut store, &mut SequentialIds::default(), "Milk".into()).unwrap();
        assert_eq!(result.affected_entries.len(), 1);
        assert!(!result.affected_entries[0].completed);
        assert_eq!(result.affected_entries[0], store.all()[0]);
    }

    #[test]
    fn keeps_name_verbatim() {
        let mut store = EntryStore::new();
        run(&mut store, &mut SequentialIds::default(), "  Milk ".into()).unwrap();
        assert_eq!(store.all()[0].name, "  Milk ");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        let mut store = EntryStore::new();
        let mut ids = SequentialIds::default();
        for name in ["", "   ", "\t"] {
            match run(&mut store, &mut ids, name.into()) {
                Err(ShoplistError::Validation(msg)) => assert_eq!(msg, INVALID_NAME_MESSAGE),
                other => panic!("Expected Validation error, got {:?}", other),
            }
        }
        assert!(store.is_empty());
    }

    #[test]
    fn rejected_name_does_not_consume_an_id() {
        let mut store = EntryStore::new();
        let mut ids = SequentialIds::new("t");
        let _ = run(&mut store, &mut ids, " ".into());
        run(&mut store, &mut ids, "Tea".into()).unwrap();
        assert_eq!(store.all()[0].id.as_str(), "t-1");
    }
}
