use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EntryId;
use crate::reorder::compute_insertion_index;
use crate::store::EntryStore;

/// Applies one drag hover event: `dragged` is repositioned relative to `hover_target`.
pub fn run(store: &mut EntryStore, dragged: &EntryId, hover_target: &EntryId) -> Result<CmdResult> {
    match compute_insertion_index(store.all(), dragged, hover_target) {
        Some(index) => run_to_index(store, dragged, index),
        None => Ok(CmdResult::default()),
    }
}

/// Moves `id` so that it ends at `index` (clamped to the list).
pub fn run_to_index(store: &mut EntryStore, id: &EntryId, index: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(from) = store.position(id) else {
        return Ok(result);
    };
    let to = index.min(store.len().saturating_sub(1));
    if from == to {
        return Ok(result);
    }

    store.move_to(id, to);
    let entry = store.require(id)?;
    result.add_message(CmdMessage::info(format!(
        "Moved {} from {} to {}",
        entry.name, from, to
    )));
    result.affected_entries.push(entry.clone());
    Ok(result)
}
