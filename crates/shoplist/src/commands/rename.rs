use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{is_valid_name, EntryId};
use crate::store::EntryStore;
use log::warn;

/// Commits the text present when editing ended. No trimming, no validation.
pub fn run(store: &mut EntryStore, id: &EntryId, name: String) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let blank = !is_valid_name(&name);
    if !store.set_name(id, name) {
        return Ok(result);
    }

    let entry = store.require(id)?;
    if blank {
        // Add rejects blank names but rename has always accepted them.
        warn!("event=blank_rename_committed id={}", id);
        result.add_message(CmdMessage::warning("Item name is now empty"));
    } else {
        result.add_message(CmdMessage::success(format!("Renamed: {}", entry.name)));
    }
    result.affected_entries.push(entry.clone());
    Ok(result)
}
