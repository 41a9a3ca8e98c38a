//! # Drag Reordering
//!
//! While an entry is dragged, the Presentation Layer reports which entry is
//! under the pointer on every hover event. Each report is turned into a final
//! index for the dragged entry and committed immediately; there is no
//! separate drop step.
//!
//! ## Placement Rule
//!
//! ```text
//! dragging down (target below):  insert after the target
//! dragging up   (target above):  insert before the target
//! ```
//!
//! Once the dragged entry is taken out of the list, both cases land it at the
//! hover target's original index:
//!
//! ```text
//! [A, B, C]  drag A over C  ->  [B, C, A]   (A ends at index 2)
//! [A, B, C]  drag C over A  ->  [C, A, B]   (C ends at index 0)
//! ```
//!
//! The index returned here is therefore the *final* position, which is exactly
//! what [`crate::store::EntryStore::move_to`] expects.

use crate::model::{Entry, EntryId};

/// Final index for `dragged_id` given the entry currently under the pointer.
///
/// Returns `None` when the dragged entry is not in `order`. Hovering over
/// itself or over an unknown id returns the dragged entry's current index.
pub fn compute_insertion_index(
    order: &[Entry],
    dragged_id: &EntryId,
    hover_target_id: &EntryId,
) -> Option<usize> {
    let dragged_index = order.iter().position(|e| &e.id == dragged_id)?;
    if dragged_id == hover_target_id {
        return Some(dragged_index);
    }

    // Below: after the target, which moves up one slot when the dragged entry
    // is lifted out. Above: before the target. Both land on target_index.
    let target_index = order
        .iter()
        .position(|e| &e.id == hover_target_id)
        .unwrap_or(dragged_index);
    Some(target_index)
}
