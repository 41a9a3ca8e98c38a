use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EntryId;
use crate::store::EntryStore;

pub fn run(store: &mut EntryStore, id: &EntryId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(entry) = store.remove_by_id(id) {
        result.add_message(CmdMessage::success(format!("Removed: {}", entry.name)));
        result.affected_entries.push(entry);
    }
    Ok(result)
}
