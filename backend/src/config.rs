//! Storage configuration: entry keys and the native data directory.

#[cfg(not(target_arch = "wasm32"))]
use log::{info, warn};
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Key holding the serialized guest collection
pub const GUESTS_KEY: &str = "wedding-guests";

/// Key holding the serialized table collection
pub const TABLES_KEY: &str = "wedding-tables";

/// Environment variable overriding the native data directory
pub const DATA_DIR_ENV: &str = "WEDDING_GUESTS_DATA_DIR";

#[cfg(not(target_arch = "wasm32"))]
const DATA_DIR_NAME: &str = "Wedding Guests";

/// Names of the two persisted entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub guests: String,
    pub tables: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            guests: GUESTS_KEY.to_string(),
            tables: TABLES_KEY.to_string(),
        }
    }
}

/// Resolve the directory used by [`crate::storage::FileStore::new_default`]
///
/// `$WEDDING_GUESTS_DATA_DIR` wins when set and non-empty; otherwise
/// `<Documents>/Wedding Guests`, falling back to the home directory and
/// finally the current directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_data_directory() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        let dir = dir.trim();
        if !dir.is_empty() {
            info!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
            return PathBuf::from(dir);
        }
        warn!("{} is set but empty, ignoring it", DATA_DIR_ENV);
    }

    let base = dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join(DATA_DIR_NAME);
    info!("Using default data directory: {}", dir.display());
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.guests, "wedding-guests");
        assert_eq!(keys.tables, "wedding-tables");
    }

    #[test]
    fn test_default_data_directory_name() {
        // Only the fallback shape is checked; the env override is process-global
        if std::env::var(DATA_DIR_ENV).is_err() {
            assert!(default_data_directory().ends_with("Wedding Guests"));
        }
    }
}
