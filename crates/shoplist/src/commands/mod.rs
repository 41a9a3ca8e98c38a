//! # Command Layer
//!
//! Each list mutation lives in its own submodule as a plain function over an
//! [`EntryStore`](crate::store::EntryStore). Commands:
//! - Validate their input
//! - Apply the change to the list
//! - Return a structured [`CmdResult`] with affected entries and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Persistence**: saving is the coordinator's job, after the command returns
//! - **Visibility**: the filter is recomputed by the coordinator
//! - **Presentation**: no notices, no DOM; results are data
//!
//! Commands are crate-private. The only way in from outside is
//! [`crate::coordinator::MutationCoordinator`], which keeps it the single
//! writer of the list.
//!
//! ## Unknown Ids
//!
//! Every id-addressed command treats an unknown id as a no-op that still
//! succeeds. The Presentation Layer only ever sends ids it rendered from this
//! list, so a miss means a stale event, not a caller bug.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests work
//! directly on an `EntryStore`, no backend involved.
//!
//! ## Command Modules
//!
//! - [`add`]: Validate a name and insert a new entry at the head
//! - [`remove`]: Delete one entry
//! - [`toggle`]: Set the completion flag
//! - [`rename`]: Commit an edited name
//! - [`reorder`]: Apply a drag hover or a direct move
//! - [`clear`]: Bulk removal (everything, or completed only)

use crate::model::Entry;
use serde::Serialize;

pub(crate) mod add;
pub(crate) mod clear;
pub(crate) mod remove;
pub(crate) mod rename;
pub(crate) mod reorder;
pub(crate) mod toggle;

pub use clear::ClearScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of one command.
///
/// `affected_entries` holds the entries as they look *after* the command
/// (or, for removals, as they looked just before leaving the list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// True when the command changed nothing.
    pub fn is_noop(&self) -> bool {
        self.affected_entries.is_empty()
    }
}
