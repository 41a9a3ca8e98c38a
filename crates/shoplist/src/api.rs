//! # API Facade
//!
//! The API layer is a **thin facade** over the coordinator. It is the surface
//! the Presentation Layer talks to: one method per UI callback, taking the raw
//! values the UI has at hand (attribute strings, checkbox state, edited text).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: filter and clear attribute strings become
//!   [`PredicateKind`] and [`ClearScope`]
//! - **Dispatches** to the matching coordinator operation
//! - **Serializes** intents: [`Intent`]s queued from several sources run one
//!   at a time, in arrival order, through [`ShoplistApi::drain`]
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Persistence or filtering**: The coordinator's pipeline handles both
//! - **Rendering**: Read projections return data; the UI draws it
//!
//! ## Attribute Parsing
//!
//! | Callback | Raw value | Result |
//! |----------|-----------|--------|
//! | `on_filter_selected` | `completed` / `incomplete` | that filter |
//! | `on_filter_selected` | anything else | `All` |
//! | `on_clear_clicked` | `all` | clear everything |
//! | `on_clear_clicked` | anything else | clear completed only |

use crate::commands::{ClearScope, CmdResult};
use crate::config::ShoplistConfig;
use crate::coordinator::{MutationCoordinator, Presenter};
use crate::error::Result;
use crate::filter::PredicateKind;
use crate::ids::{IdGenerator, TimeRandomIds};
use crate::model::{Entry, EntryId};
use crate::store::backend::StorageBackend;
use log::debug;
use std::collections::{HashSet, VecDeque};

/// One user intent, as delivered by the Presentation Layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Submit { raw_name: String },
    Toggle { id: EntryId, checked: bool },
    Delete { id: EntryId },
    RenameCommitted { id: EntryId, text: String },
    DragHover { dragged: EntryId, target: EntryId },
    FilterSelected { raw_kind: String },
    ClearClicked { raw_scope: String },
}

/// FIFO of pending intents. Drained by [`ShoplistApi::drain`].
#[derive(Debug, Default)]
pub struct IntentQueue {
    pending: VecDeque<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn pop(&mut self) -> Option<Intent> {
        self.pending.pop_front()
    }
}

/// The main API facade for list operations.
///
/// Generic over `StorageBackend`:
/// - Browser: `ShoplistApi<WebStorageBackend>`
/// - Native: `ShoplistApi<FsBackend>`
/// - Testing: `ShoplistApi<MemBackend>`
pub struct ShoplistApi<B: StorageBackend> {
    coordinator: MutationCoordinator<B>,
}

impl<B: StorageBackend> ShoplistApi<B> {
    /// Opens the list stored in `backend` under the configured key.
    pub fn open(backend: B, config: &ShoplistConfig) -> Self {
        Self::open_with_ids(backend, config, Box::new(TimeRandomIds::new()))
    }

    pub fn open_with_ids(backend: B, config: &ShoplistConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            coordinator: MutationCoordinator::open(backend, ids, config),
        }
    }

    pub fn set_presenter(&mut self, presenter: Box<dyn Presenter>) {
        self.coordinator.set_presenter(presenter);
    }

    // --- Callbacks consumed from the Presentation Layer ---

    pub fn on_submit(&mut self, raw_name: &str) -> Result<CmdResult> {
        self.coordinator.add_entry(raw_name)
    }

    pub fn on_toggle(&mut self, id: &EntryId, checked: bool) -> Result<CmdResult> {
        self.coordinator.toggle_completed(id, checked)
    }

    pub fn on_delete_clicked(&mut self, id: &EntryId) -> Result<CmdResult> {
        self.coordinator.remove_entry(id)
    }

    pub fn on_rename_committed(&mut self, id: &EntryId, text: &str) -> Result<CmdResult> {
        self.coordinator.rename_entry(id, text)
    }

    pub fn on_drag_hover(&mut self, dragged: &EntryId, target: &EntryId) -> Result<CmdResult> {
        self.coordinator.reorder_entry(dragged, target)
    }

    pub fn on_filter_selected(&mut self, raw_kind: &str) -> PredicateKind {
        let kind = PredicateKind::from_attr(raw_kind);
        self.coordinator.set_filter(kind);
        kind
    }

    pub fn on_clear_clicked(&mut self, raw_scope: &str) -> Result<CmdResult> {
        self.coordinator.bulk_clear(ClearScope::from_attr(raw_scope))
    }

    // --- Intents ---

    /// Runs one intent to completion.
    pub fn dispatch(&mut self, intent: Intent) -> Result<CmdResult> {
        match intent {
            Intent::Submit { raw_name } => self.on_submit(&raw_name),
            Intent::Toggle { id, checked } => self.on_toggle(&id, checked),
            Intent::Delete { id } => self.on_delete_clicked(&id),
            Intent::RenameCommitted { id, text } => self.on_rename_committed(&id, &text),
            Intent::DragHover { dragged, target } => self.on_drag_hover(&dragged, &target),
            Intent::FilterSelected { raw_kind } => {
                self.on_filter_selected(&raw_kind);
                Ok(CmdResult::default())
            }
            Intent::ClearClicked { raw_scope } => self.on_clear_clicked(&raw_scope),
        }
    }

    /// Runs every queued intent in arrival order; one result per intent.
    ///
    /// A failing intent does not stop the ones queued after it.
    pub fn drain(&mut self, queue: &mut IntentQueue) -> Vec<Result<CmdResult>> {
        let mut results = Vec::with_capacity(queue.len());
        while let Some(intent) = queue.pop() {
            debug!("event=intent_dispatch pending={}", queue.len());
            results.push(self.dispatch(intent));
        }
        results
    }

    // --- Projections exposed to the Presentation Layer ---

    pub fn current_order(&self) -> &[Entry] {
        self.coordinator.current_order()
    }

    pub fn visible_ids(&self) -> &HashSet<EntryId> {
        self.coordinator.visible_ids()
    }

    pub fn is_list_empty(&self) -> bool {
        self.coordinator.is_list_empty()
    }

    pub fn active_filter(&self) -> PredicateKind {
        self.coordinator.active_filter()
    }

    pub fn can_edit(&self, id: &EntryId) -> bool {
        self.coordinator.can_edit(id)
    }

    pub fn coordinator(&self) -> &MutationCoordinator<B> {
        &self.coordinator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShoplistError;
    use crate::ids::SequentialIds;
    use crate::store::mem_backend::MemBackend;

    fn api() -> ShoplistApi<MemBackend> {
        ShoplistApi::open_with_ids(
            MemBackend::new(),
            &ShoplistConfig::default(),
            Box::new(SequentialIds::new("t")),
        )
    }

    fn names(api: &ShoplistApi<MemBackend>) -> Vec<&str> {
        api.current_order().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_submit_dispatches_to_add() {
        let mut api = api();
        api.on_submit("Milk").unwrap();
        assert_eq!(names(&api), vec!["Milk"]);
        assert!(!api.is_list_empty());
    }

    #[test]
    fn test_submit_blank_is_validation_error() {
        let mut api = api();
        let err = api.on_submit("  ").unwrap_err();
        assert!(err.is_user_facing());
        assert!(matches!(err, ShoplistError::Validation(_)));
        assert!(api.is_list_empty());
    }

    #[test]
    fn test_filter_attr_fallback() {
        let mut api = api();
        assert_eq!(api.on_filter_selected("incomplete"), PredicateKind::Incomplete);
        assert_eq!(api.on_filter_selected("bogus"), PredicateKind::All);
        assert_eq!(api.active_filter(), PredicateKind::All);
    }

    #[test]
    fn test_clear_attr_all_vs_other() {
        let mut api = api();
        api.on_submit("A").unwrap();
        api.on_submit("B").unwrap();
        api.on_toggle(&"t-1".into(), true).unwrap();

        api.on_clear_clicked("completed").unwrap();
        assert_eq!(names(&api), vec!["B"]);

        api.on_clear_clicked("all").unwrap();
        assert!(api.is_list_empty());
    }

    #[test]
    fn test_uses_configured_storage_key() {
        let config = ShoplistConfig {
            storage_key: "groceries".to_string(),
            ..Default::default()
        };
        let mut api = ShoplistApi::open(MemBackend::new(), &config);
        api.on_submit("Milk").unwrap();
        let backend = api.coordinator().gateway().backend();
        assert!(backend.raw("groceries").is_some());
        assert!(backend.raw("shoppingitems").is_none());
    }

    #[test]
    fn test_queue_runs_in_order() {
        let mut api = api();
        let mut queue = IntentQueue::new();
        queue.push(Intent::Submit { raw_name: "Eggs".into() });
        queue.push(Intent::Submit { raw_name: "".into() });
        queue.push(Intent::Submit { raw_name: "Bread".into() });
        queue.push(Intent::RenameCommitted {
            id: "t-1".into(),
            text: "Brown eggs".into(),
        });
        queue.push(Intent::Delete { id: "t-1".into() });
        assert_eq!(queue.len(), 5);

        let results = api.drain(&mut queue);
        assert!(queue.is_empty());
        assert_eq!(results.len(), 5);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
        // The rename lands before the delete, never interleaved.
        assert_eq!(results[3].as_ref().unwrap().affected_entries[0].name, "Brown eggs");
        assert_eq!(results[4].as_ref().unwrap().affected_entries[0].name, "Brown eggs");
        assert_eq!(names(&api), vec!["Bread"]);
    }

    #[test]
    fn test_dispatch_drag_and_filter() {
        let mut api = api();
        for name in ["C", "B", "A"] {
            api.on_submit(name).unwrap();
        }
        // Order is [A, B, C] with ids t-3, t-2, t-1.
        api.dispatch(Intent::DragHover {
            dragged: "t-1".into(),
            target: "t-3".into(),
        })
        .unwrap();
        assert_eq!(names(&api), vec!["C", "A", "B"]);

        api.dispatch(Intent::Toggle {
            id: "t-1".into(),
            checked: true,
        })
        .unwrap();
        api.dispatch(Intent::FilterSelected {
            raw_kind: "completed".into(),
        })
        .unwrap();
        assert_eq!(api.visible_ids().len(), 1);
        assert!(api.visible_ids().contains(&EntryId::from("t-1")));
        assert!(!api.can_edit(&"t-1".into()));
    }
}
