use super::backend::StorageBackend;
use crate::error::{Result, ShoplistError};
use web_sys::Storage;

/// Browser backend over `window.localStorage`.
///
/// Writes go through `setItem`, which replaces the whole value in one call.
pub struct WebStorageBackend {
    storage: Storage,
}

impl WebStorageBackend {
    /// Binds to the current window's `localStorage`.
    pub fn local() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ShoplistError::Store("No window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|err| ShoplistError::Store(format!("localStorage unavailable: {:?}", err)))?
            .ok_or_else(|| ShoplistError::Store("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }

    pub fn with_storage(storage: Storage) -> Self {
        Self { storage }
    }
}

impl StorageBackend for WebStorageBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| ShoplistError::Store(format!("getItem({}) failed: {:?}", key, err)))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| ShoplistError::Store(format!("setItem({}) failed: {:?}", key, err)))
    }

    fn remove_slot(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|err| ShoplistError::Store(format!("removeItem({}) failed: {:?}", key, err)))
    }
}
