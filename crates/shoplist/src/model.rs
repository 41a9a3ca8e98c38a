//! # Domain Model
//!
//! The list has a single entity, [`Entry`]: an opaque id, a free-text name and
//! a completion flag. The serialized shape is fixed, since it is what lands in
//! the durable slot:
//!
//! ```text
//! {"id": "lq2x7k0a9f3h1c", "name": "Milk", "completed": false}
//! ```
//!
//! ## Names
//!
//! A name must contain something other than whitespace when an entry is
//! *created* (see [`is_valid_name`]). Renames commit whatever text the user
//! left in the field, including an empty string. The name is stored verbatim:
//! no trimming on either path.
//!
//! ## Identity
//!
//! [`EntryId`] wraps a `String` and serializes transparently. Ids are produced
//! by [`crate::ids`] and never change after creation.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for EntryId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One item on the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub completed: bool,
}

impl Entry {
    /// A fresh, incomplete entry.
    pub fn new(id: EntryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Returns true when `name` is acceptable for a new entry.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
