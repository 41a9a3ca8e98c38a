use crate::error::{Result, ShoplistError};
use crate::model::{Entry, EntryId};

/// The in-memory, ordered list of entries.
///
/// Reads are public. Mutations are crate-private: only the command layer,
/// driven by [`crate::coordinator::MutationCoordinator`], writes here.
/// Every mutation addressed by id is a silent no-op when the id is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    /// Lookup that reports a missing id as [`ShoplistError::NotFound`].
    pub fn require(&self, id: &EntryId) -> Result<&Entry> {
        self.get(id).ok_or_else(|| ShoplistError::NotFound(id.clone()))
    }

    pub(crate) fn replace_all(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    /// Inserts at `index`, clamped to the end of the list.
    pub(crate) fn insert_at(&mut self, index: usize, entry: Entry) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
    }

    pub(crate) fn remove_by_id(&mut self, id: &EntryId) -> Option<Entry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Moves the entry so that it ends up at `new_index` (clamped).
    pub(crate) fn move_to(&mut self, id: &EntryId, new_index: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let entry = self.entries.remove(from);
        let to = new_index.min(self.entries.len());
        self.entries.insert(to, entry);
        true
    }

    pub(crate) fn set_completed(&mut self, id: &EntryId, completed: bool) -> bool {
        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.completed = completed;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_name(&mut self, id: &EntryId, name: String) -> bool {
        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.name = name;
                true
            }
            None => false,
        }
    }

    /// Keeps entries matching `keep`; returns how many were removed.
    pub(crate) fn retain<F: FnMut(&Entry) -> bool>(&mut self, keep: F) -> usize {
        let before = self.entries.len();
        self.entries.retain(keep);
        before - self.entries.len()
    }
}
