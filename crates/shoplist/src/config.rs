//! # Configuration
//!
//! Configuration is managed by [`confique`]. Values from an optional TOML file
//! are layered over the compiled defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `shoppingitems` | Durable slot the list is saved under |
//! | `default_filter` | `all` | Filter on open: `all`, `completed` or `incomplete` |
//!
//! ## Example
//!
//! ```toml
//! storage_key = "groceries"
//! default_filter = "incomplete"
//! ```

use crate::error::{Result, ShoplistError};
use crate::filter::PredicateKind;
use crate::store::DEFAULT_SLOT_KEY;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration, optionally stored in `shoplist.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShoplistConfig {
    /// Key of the durable slot holding the serialized list.
    #[config(default = "shoppingitems")]
    pub storage_key: String,

    /// Filter active when the list is opened.
    #[config(default = "all")]
    pub default_filter: PredicateKind,
}

impl Default for ShoplistConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_SLOT_KEY.to_string(),
            default_filter: PredicateKind::All,
        }
    }
}

impl ShoplistConfig {
    /// Load from `path` layered over the defaults. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::builder()
            .file(path)
            .load()
            .map_err(|err| ShoplistError::Config(err.to_string()))?;
        config.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.storage_key.trim().is_empty() {
            return Err(ShoplistError::Config(
                "storage_key must not be empty".to_string(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = ShoplistConfig::default();
        assert_eq!(config.storage_key, "shoppingitems");
        assert_eq!(config.default_filter, PredicateKind::All);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShoplistConfig::load_from(&dir.path().join("shoplist.toml")).unwrap();
        assert_eq!(config, ShoplistConfig::default());
    }

    #[test]
    fn test_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shoplist.toml");
        fs::write(
            &path,
            "storage_key = \"groceries\"\ndefault_filter = \"incomplete\"\n",
        )
        .unwrap();

        let config = ShoplistConfig::load_from(&path).unwrap();
        assert_eq!(config.storage_key, "groceries");
        assert_eq!(config.default_filter, PredicateKind::Incomplete);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shoplist.toml");
        fs::write(&path, "default_filter = \"completed\"\n").unwrap();

        let config = ShoplistConfig::load_from(&path).unwrap();
        assert_eq!(config.storage_key, "shoppingitems");
        assert_eq!(config.default_filter, PredicateKind::Completed);
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shoplist.toml");
        let original = ShoplistConfig {
            storage_key: "list-v2".to_string(),
            default_filter: PredicateKind::Completed,
        };
        fs::write(&path, toml::to_string(&original).unwrap()).unwrap();

        assert_eq!(ShoplistConfig::load_from(&path).unwrap(), original);
    }

    #[test]
    fn test_blank_storage_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shoplist.toml");
        fs::write(&path, "storage_key = \"  \"\n").unwrap();

        assert!(matches!(
            ShoplistConfig::load_from(&path),
            Err(ShoplistError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_filter_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shoplist.toml");
        fs::write(&path, "default_filter = \"done\"\n").unwrap();

        assert!(ShoplistConfig::load_from(&path).is_err());
    }
}
