use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EntryStore;
use serde::{Deserialize, Serialize};

/// Which entries a bulk clear removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearScope {
    All,
    CompletedOnly,
}

impl ClearScope {
    /// Lenient parse for values coming from UI attributes.
    ///
    /// Only `all` clears everything; any other value clears completed entries.
    pub fn from_attr(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            ClearScope::All
        } else {
            ClearScope::CompletedOnly
        }
    }
}

pub fn run(store: &mut EntryStore, scope: ClearScope) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let removed: Vec<_> = store
        .all()
        .iter()
        .filter(|e| scope == ClearScope::All || e.completed)
        .cloned()
        .collect();

    let count = match scope {
        ClearScope::All => store.retain(|_| false),
        ClearScope::CompletedOnly => store.retain(|e| !e.completed),
    };

    if count > 0 {
        result.add_message(CmdMessage::success(format!("Cleared {} item(s)", count)));
    }
    result.affected_entries = removed;
    Ok(result)
}
