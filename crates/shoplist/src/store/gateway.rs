use super::backend::StorageBackend;
use crate::error::{Result, ShoplistError};
use crate::model::{Entry, EntryId};
use log::{debug, warn};
use std::collections::HashSet;

pub const DEFAULT_SLOT_KEY: &str = "shoppingitems";

/// Serializes the list into one durable slot and reads it back.
pub struct PersistenceGateway<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
}

impl<B: StorageBackend> PersistenceGateway<B> {
    pub fn with_backend(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_SLOT_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Overwrite the slot with the full ordered list.
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        let raw = serde_json::to_string(entries).map_err(ShoplistError::Serialization)?;
        self.backend.write_slot(&self.key, &raw)?;
        debug!("event=list_saved key={} entries={}", self.key, entries.len());
        Ok(())
    }

    /// Read the list back. Any failure degrades to an empty list.
    pub fn load(&self) -> Vec<Entry> {
        match self.try_load() {
            Ok(entries) => entries,
            Err(err) => {
                warn!("event=list_load_failed key={} error={}", self.key, err);
                Vec::new()
            }
        }
    }

    /// Fallible read, reporting problems as [`ShoplistError::PersistenceRead`].
    ///
    /// An absent slot or a JSON `null` is an empty list, not an error.
    pub fn try_load(&self) -> Result<Vec<Entry>> {
        let raw = self
            .backend
            .read_slot(&self.key)
            .map_err(|err| ShoplistError::PersistenceRead(err.to_string()))?;

        let Some(raw) = raw else {
            debug!("event=list_loaded key={} entries=0 slot=absent", self.key);
            return Ok(Vec::new());
        };

        let parsed: Option<Vec<Entry>> = serde_json::from_str(&raw)
            .map_err(|err| ShoplistError::PersistenceRead(err.to_string()))?;
        let entries = dedupe_ids(parsed.unwrap_or_default());
        debug!("event=list_loaded key={} entries={}", self.key, entries.len());
        Ok(entries)
    }

    /// Remove the slot entirely.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove_slot(&self.key)
    }
}

/// Drop repeated ids, keeping the first occurrence.
fn dedupe_ids(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen: HashSet<EntryId> = HashSet::with_capacity(entries.len());
    let before = entries.len();
    let unique: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect();
    if unique.len() != before {
        warn!("event=duplicate_ids_dropped count={}", before - unique.len());
    }
    unique
}
