//! # Shoplist Architecture
//!
//! Shoplist is the **state engine** of a browser-resident shopping list. It
//! knows nothing about the DOM: the page builds elements, wires listeners and
//! calls into this crate; this crate decides what the list looks like and
//! keeps local storage in sync with it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation Layer (outside this crate)                    │
//! │  - Renders entries, owns editing mode and drag visuals      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ on_submit, on_toggle, on_drag_hover, ...
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per UI callback, raw values in                │
//! │  - Intent queue for strictly ordered dispatch               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Coordinator (coordinator.rs)                               │
//! │  - Sole writer of the list                                  │
//! │  - validate → mutate → filter → save → notify               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One mutation per module, pure list logic                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - EntryStore: the in-memory list                           │
//! │  - PersistenceGateway over a StorageBackend (durable slot)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure helpers sit beside the layers: [`filter`] (visibility), [`reorder`]
//! (drag placement) and [`ids`] (identifier generation).
//!
//! ## Quick Start
//!
//! ```
//! use shoplist::api::ShoplistApi;
//! use shoplist::config::ShoplistConfig;
//! use shoplist::store::mem_backend::MemBackend;
//!
//! let mut api = ShoplistApi::open(MemBackend::new(), &ShoplistConfig::default());
//! api.on_submit("Eggs").unwrap();
//! api.on_submit("Bread").unwrap();
//!
//! let names: Vec<_> = api.current_order().iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, vec!["Bread", "Eggs"]);
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The facade the Presentation Layer calls
//! - [`coordinator`]: Mutation pipeline and read projections
//! - [`commands`]: Per-mutation list logic and `CmdResult`
//! - [`store`]: In-memory list, persistence gateway and storage backends
//! - [`filter`]: Display predicates
//! - [`reorder`]: Drag hover placement
//! - [`ids`]: Entry id generation
//! - [`model`]: `Entry` and `EntryId`
//! - [`config`]: Configuration
//! - `logging`: Optional stderr logger for native hosts
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod filter;
pub mod ids;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod reorder;
pub mod store;
