use super::gateway::PersistenceGateway;
use super::mem_backend::MemBackend;

pub type InMemoryGateway = PersistenceGateway<MemBackend>;

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    pub fn new() -> Self {
        PersistenceGateway::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Entry, EntryId};
    use crate::store::gateway::DEFAULT_SLOT_KEY;

    /// Builds a gateway whose slot already holds a list.
    pub struct GatewayFixture {
        entries: Vec<Entry>,
        raw: Option<String>,
    }

    impl Default for GatewayFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl GatewayFixture {
        pub fn new() -> Self {
            Self {
                entries: Vec::new(),
                raw: None,
            }
        }

        /// Appends an incomplete entry whose id equals its name.
        pub fn with_entry(mut self, name: &str) -> Self {
            self.entries.push(Entry::new(EntryId::new(name), name));
            self
        }

        /// Appends a completed entry whose id equals its name.
        pub fn with_completed_entry(mut self, name: &str) -> Self {
            self.entries
                .push(Entry::new(EntryId::new(name), name).with_completed(true));
            self
        }

        pub fn with_entries(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Item {}", i + 1);
                self.entries.push(Entry::new(EntryId::new(format!("item-{}", i + 1)), name));
            }
            self
        }

        /// Stores `raw` verbatim instead of serializing the entries.
        pub fn with_raw_slot(mut self, raw: &str) -> Self {
            self.raw = Some(raw.to_string());
            self
        }

        pub fn entries(&self) -> &[Entry] {
            &self.entries
        }

        pub fn build(self) -> InMemoryGateway {
            let raw = match self.raw {
                Some(raw) => raw,
                None => serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string()),
            };
            PersistenceGateway::with_backend(MemBackend::with_slot(DEFAULT_SLOT_KEY, &raw))
        }
    }
}
