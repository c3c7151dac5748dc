use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{default_guests, default_tables, Guest, Table};

use super::error::StorageError;
use super::traits::KeyValueStore;
use crate::config::StorageKeys;

/// Typed access to the guest and table collections of a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct CollectionRepository<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> CollectionRepository<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_guests(&self) -> Result<Vec<Guest>, StorageError> {
        self.load_collection(&self.keys.guests)
    }

    pub fn load_tables(&self) -> Result<Vec<Table>, StorageError> {
        self.load_collection(&self.keys.tables)
    }

    /// Stored guests, or the seed list when the entry is missing or unreadable
    pub fn load_guests_or_default(&self) -> Vec<Guest> {
        self.load_guests()
            .unwrap_or_else(|e| self.fallback(&self.keys.guests, e, default_guests))
    }

    /// Stored tables, or the fixed table set when the entry is missing or unreadable
    pub fn load_tables_or_default(&self) -> Vec<Table> {
        self.load_tables()
            .unwrap_or_else(|e| self.fallback(&self.keys.tables, e, default_tables))
    }

    pub fn save_guests(&self, guests: &[Guest]) -> Result<(), StorageError> {
        self.save_collection(&self.keys.guests, guests)
    }

    pub fn save_tables(&self, tables: &[Table]) -> Result<(), StorageError> {
        self.save_collection(&self.keys.tables, tables)
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        let raw = self
            .store
            .load(key)?
            .ok_or_else(|| StorageError::Missing(key.to_string()))?;

        serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
            key: key.to_string(),
            source,
        })
    }

    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.save(key, &raw)?;
        Ok(())
    }

    fn fallback<T>(&self, key: &str, error: StorageError, defaults: fn() -> Vec<T>) -> Vec<T> {
        if error.is_missing() {
            info!("Nothing stored under '{}', starting from defaults", key);
        } else {
            warn!("Ignoring stored '{}', using defaults: {}", key, error);
        }
        defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use shared::GuestStatus;

    fn repo(store: MemoryStore) -> CollectionRepository<MemoryStore> {
        CollectionRepository::new(store, StorageKeys::default())
    }

    #[test]
    fn test_missing_entries_fall_back_to_seed() {
        let repo = repo(MemoryStore::new());

        assert!(matches!(repo.load_guests(), Err(StorageError::Missing(_))));
        assert_eq!(repo.load_guests_or_default(), default_guests());
        assert_eq!(repo.load_tables_or_default(), default_tables());
    }

    #[test]
    fn test_malformed_entries_fall_back_to_seed() {
        let store = MemoryStore::with_entry("wedding-guests", "{not json");
        store.save("wedding-tables", r#"[{"id":1}]"#).unwrap();
        let repo = repo(store);

        assert!(matches!(repo.load_guests(), Err(StorageError::Malformed { .. })));
        assert_eq!(repo.load_guests_or_default(), default_guests());
        assert_eq!(repo.load_tables_or_default(), default_tables());
    }

    #[test]
    fn test_unknown_status_is_malformed() {
        let raw = r#"[{"id":1,"nom":"A","prenom":"B","email":"c","statut":"MAYBE","tableId":null,"regimeAlimentaire":""}]"#;
        let repo = repo(MemoryStore::with_entry("wedding-guests", raw));

        assert!(matches!(repo.load_guests(), Err(StorageError::Malformed { .. })));
    }

    #[test]
    fn test_save_then_load_guests() {
        let repo = repo(MemoryStore::new());
        let mut guests = default_guests();
        guests.truncate(2);
        guests[1].status = GuestStatus::Declined;

        repo.save_guests(&guests).unwrap();
        assert_eq!(repo.load_guests().unwrap(), guests);
    }

    #[test]
    fn test_empty_collection_is_not_replaced() {
        // An explicitly emptied guest list stays empty
        let repo = repo(MemoryStore::with_entry("wedding-guests", "[]"));
        assert!(repo.load_guests_or_default().is_empty());
    }

    #[test]
    fn test_legacy_entries_without_optional_fields() {
        let raw = r#"[{"id":4,"nom":"Rousseau","prenom":"Jean","email":"j@r.fr","statut":"CONFIRMED"}]"#;
        let repo = repo(MemoryStore::with_entry("wedding-guests", raw));

        let guests = repo.load_guests().unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].table_id, None);
        assert_eq!(guests[0].dietary_notes, "");
    }

    #[test]
    fn test_custom_keys() {
        let store = MemoryStore::new();
        let keys = StorageKeys {
            guests: "g".to_string(),
            tables: "t".to_string(),
        };
        let repo = CollectionRepository::new(store.clone(), keys);

        repo.save_tables(&default_tables()).unwrap();
        assert!(store.load("t").unwrap().is_some());
        assert!(store.load("wedding-tables").unwrap().is_none());
    }
}
