use anyhow::{anyhow, Result};
use backend::KeyValueStore;

/// `window.localStorage` as a [`KeyValueStore`]
///
/// Storage is looked up on every call so a page without `localStorage`
/// (sandboxed iframe, disabled storage) degrades to load/save errors instead
/// of a panic; the guest manager then runs on its seed data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

impl BrowserStore {
    fn local_storage() -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| anyhow!("No window object"))?;
        window
            .local_storage()
            .map_err(|e| anyhow!("localStorage access denied: {:?}", e))?
            .ok_or_else(|| anyhow!("localStorage unavailable"))
    }
}

impl KeyValueStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| anyhow!("Failed to read '{}' from localStorage: {:?}", key, e))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("Failed to write '{}' to localStorage: {:?}", key, e))
    }
}
