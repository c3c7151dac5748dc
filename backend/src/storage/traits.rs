//! # Storage Traits
//!
//! The storage abstraction the domain layer persists through, so browser,
//! file and in-memory backends are interchangeable.

use anyhow::Result;

/// A string-keyed store of text entries
///
/// Single writer, single reader: implementations need no conflict detection.
pub trait KeyValueStore {
    /// Read the entry stored under `key`, `None` if nothing was ever saved
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the entry stored under `key`
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
