use crate::model::EntryId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShoplistError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Could not read persisted list: {0}")]
    PersistenceRead(String),

    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShoplistError {
    /// True for errors that should be shown to the user as a blocking notice.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ShoplistError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, ShoplistError>;
