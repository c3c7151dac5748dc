use thiserror::Error;

/// Why a collection could not be read from or written to the store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no entry stored under '{0}'")]
    Missing(String),

    #[error("entry '{key}' is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize entry '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl StorageError {
    /// Missing entries are the normal first-run case, not a fault
    pub fn is_missing(&self) -> bool {
        matches!(self, StorageError::Missing(_))
    }
}
