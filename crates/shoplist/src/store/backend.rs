use crate::error::Result;

/// Abstract interface for the durable key-value slot.
///
/// This trait handles the "how" of storage (memory, filesystem, browser
/// `localStorage`), while [`super::gateway::PersistenceGateway`] handles the
/// "what" (the serialized list format and its recovery rules).
pub trait StorageBackend {
    /// Read the raw value of a slot.
    /// Returns Ok(None) if the slot has never been written.
    /// Returns Err only when the storage itself fails.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot.
    /// MUST be atomic as seen by later reads: either the old or the new value, never a mix.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn remove_slot(&self, key: &str) -> Result<()>;
}
