//! # Mutation Coordinator
//!
//! The coordinator owns the list and is the only code path that writes to it.
//! Every mutation follows the same pipeline:
//!
//! ```text
//! validate ─▶ mutate EntryStore ─▶ recompute visibility ─▶ save ─▶ notify presenter
//!  (command)     (command)            (filter)          (gateway)   (Presenter)
//! ```
//!
//! ## Ownership
//!
//! There is no global list. A coordinator is built with its backend and id
//! generator injected, loads the persisted list once in
//! [`MutationCoordinator::open`],
//! and from then on every method takes `&mut self`. Exclusive access is
//! enforced by the borrow checker: one mutation finishes before the next can
//! start.
//!
//! ## Persistence Policy
//!
//! Saves are unconditional, including for no-op mutations such as deleting an
//! unknown id. If the save fails the error is returned, but the in-memory
//! change stays applied; the next successful save brings the slot back in
//! line. Filter changes are UI state and are never saved.
//!
//! ## Validation Failures
//!
//! A rejected `add_entry` returns [`ShoplistError::Validation`] *and* calls
//! [`Presenter::validation_failed`], so hosts can either match on the error
//! or just render the notice from the callback.

use crate::commands::{self, ClearScope, CmdResult};
use crate::config::ShoplistConfig;
use crate::error::{Result, ShoplistError};
use crate::filter::{visible_set, PredicateKind};
use crate::ids::IdGenerator;
use crate::model::{Entry, EntryId};
use crate::store::backend::StorageBackend;
use crate::store::{EntryStore, PersistenceGateway};
use log::debug;
use std::collections::HashSet;

/// Display-side collaborator. All methods default to doing nothing.
pub trait Presenter {
    /// The list or the visible set changed; redraw.
    fn refresh(&mut self, _order: &[Entry], _visible: &HashSet<EntryId>) {}

    /// An add was rejected; show a blocking notice.
    fn validation_failed(&mut self, _message: &str) {}
}

pub struct MutationCoordinator<B: StorageBackend> {
    store: EntryStore,
    gateway: PersistenceGateway<B>,
    ids: Box<dyn IdGenerator>,
    filter: PredicateKind,
    visible: HashSet<EntryId>,
    presenter: Option<Box<dyn Presenter>>,
}

impl<B: StorageBackend> MutationCoordinator<B> {
    /// Opens the list held in `backend` under `config.storage_key` and starts
    /// with the configured filter.
    pub fn open(backend: B, ids: Box<dyn IdGenerator>, config: &ShoplistConfig) -> Self {
        let gateway = PersistenceGateway::with_key(backend, config.storage_key.clone());
        Self::with_gateway(gateway, ids, config.default_filter)
    }

    /// Loads the list through an already-keyed gateway.
    pub fn with_gateway(
        gateway: PersistenceGateway<B>,
        ids: Box<dyn IdGenerator>,
        filter: PredicateKind,
    ) -> Self {
        let entries = gateway.load();
        debug!(
            "event=coordinator_open key={} entries={} filter={}",
            gateway.key(),
            entries.len(),
            filter
        );
        let mut coordinator = Self {
            store: EntryStore::new(),
            gateway,
            ids,
            filter,
            visible: HashSet::new(),
            presenter: None,
        };
        coordinator.store.replace_all(entries);
        coordinator.recompute_visibility();
        coordinator
    }

    pub fn with_presenter(mut self, presenter: Box<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self.notify_refresh();
        self
    }

    pub fn set_presenter(&mut self, presenter: Box<dyn Presenter>) {
        self.presenter = Some(presenter);
        self.notify_refresh();
    }

    // --- Mutations ---

    pub fn add_entry(&mut self, name: impl Into<String>) -> Result<CmdResult> {
        let name = name.into();
        match commands::add::run(&mut self.store, self.ids.as_mut(), name) {
            Ok(result) => self.commit("add", result),
            Err(ShoplistError::Validation(message)) => {
                debug!("event=add_rejected reason=validation");
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.validation_failed(&message);
                }
                Err(ShoplistError::Validation(message))
            }
            Err(err) => Err(err),
        }
    }

    pub fn remove_entry(&mut self, id: &EntryId) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.store, id)?;
        self.commit("remove", result)
    }

    pub fn toggle_completed(&mut self, id: &EntryId, completed: bool) -> Result<CmdResult> {
        let result = commands::toggle::run(&mut self.store, id, completed)?;
        self.commit("toggle", result)
    }

    pub fn rename_entry(&mut self, id: &EntryId, name: impl Into<String>) -> Result<CmdResult> {
        let result = commands::rename::run(&mut self.store, id, name.into())?;
        self.commit("rename", result)
    }

    /// Applies one drag hover event and persists the new order immediately.
    pub fn reorder_entry(
        &mut self,
        dragged: &EntryId,
        hover_target: &EntryId,
    ) -> Result<CmdResult> {
        let result = commands::reorder::run(&mut self.store, dragged, hover_target)?;
        self.commit("reorder", result)
    }

    /// Moves `id` directly to `index` (clamped).
    pub fn move_entry(&mut self, id: &EntryId, index: usize) -> Result<CmdResult> {
        let result = commands::reorder::run_to_index(&mut self.store, id, index)?;
        self.commit("move", result)
    }

    pub fn bulk_clear(&mut self, scope: ClearScope) -> Result<CmdResult> {
        let result = commands::clear::run(&mut self.store, scope)?;
        self.commit("clear", result)
    }

    /// Switches the active filter. Not persisted.
    pub fn set_filter(&mut self, kind: PredicateKind) {
        debug!("event=filter_changed from={} to={}", self.filter, kind);
        self.filter = kind;
        self.recompute_visibility();
        self.notify_refresh();
    }

    // --- Read projections ---

    pub fn current_order(&self) -> &[Entry] {
        self.store.all()
    }

    pub fn visible_ids(&self) -> &HashSet<EntryId> {
        &self.visible
    }

    /// Visible entries in display order.
    pub fn visible_entries(&self) -> Vec<&Entry> {
        self.store
            .all()
            .iter()
            .filter(|e| self.visible.contains(&e.id))
            .collect()
    }

    pub fn is_list_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn active_filter(&self) -> PredicateKind {
        self.filter
    }

    /// Whether the name of `id` may be edited: it exists and is not completed.
    pub fn can_edit(&self, id: &EntryId) -> bool {
        self.store.get(id).is_some_and(|e| !e.completed)
    }

    pub fn gateway(&self) -> &PersistenceGateway<B> {
        &self.gateway
    }

    // --- Pipeline ---

    fn commit(&mut self, op: &str, result: CmdResult) -> Result<CmdResult> {
        self.recompute_visibility();
        let saved = self.gateway.save(self.store.all());
        debug!(
            "event=mutation op={} affected={} entries={} saved={}",
            op,
            result.affected_entries.len(),
            self.store.len(),
            saved.is_ok()
        );
        self.notify_refresh();
        saved?;
        Ok(result)
    }

    fn recompute_visibility(&mut self) {
        self.visible = visible_set(self.store.all(), self.filter);
    }

    fn notify_refresh(&mut self) {
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.refresh(self.store.all(), &self.visible);
        }
    }
}
