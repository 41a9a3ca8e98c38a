//! # Storage Layer
//!
//! Two different things are called "store" here:
//!
//! 1. **The list**: [`EntryStore`], the in-memory ordered `Vec<Entry>`. It is
//!    the single source of truth while the page is open.
//! 2. **The durable slot**: one key in a key-value store holding the
//!    serialized list, so it survives reloads.
//!
//! ## Write-Through
//!
//! The durable slot is never edited piecemeal. After every mutation the
//! coordinator hands the whole list to [`PersistenceGateway::save`], which
//! overwrites the slot. On startup [`PersistenceGateway::load`] replaces the
//! in-memory list wholesale.
//!
//! ## Slot Format
//!
//! ```text
//! shoppingitems = [
//!   {"id": "lq2x7k0a9f3h", "name": "Bread", "completed": false},
//!   {"id": "lq2x6z1b2c4d", "name": "Eggs",  "completed": true}
//! ]
//! ```
//!
//! Array order is display order.
//!
//! ## Recovery
//!
//! - Absent slot, or `null`: empty list.
//! - Unreadable or malformed slot: empty list, logged at `warn`. The bad value
//!   is left in place until the next save overwrites it.
//! - Repeated ids: the first occurrence wins.
//!
//! ## Implementations
//!
//! - [`mem_backend::MemBackend`]: For testing logic without any real storage.
//! - [`fs_backend::FsBackend`]: One JSON file per slot, atomic rename on write.
//! - `web_backend::WebStorageBackend`: Browser `localStorage` (`web` feature, wasm32 only).

pub mod backend;
pub mod entries;
pub mod fs_backend;
pub mod gateway;
pub mod mem_backend;
pub mod memory;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web_backend;

pub use entries::EntryStore;
pub use gateway::{PersistenceGateway, DEFAULT_SLOT_KEY};
