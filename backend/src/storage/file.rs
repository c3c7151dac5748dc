use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStore;
use crate::config;

/// Directory-backed store: each key lives in `<base>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    base_directory: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Open a store in the configured data directory
    pub fn new_default() -> Result<Self> {
        Self::new(config::default_data_directory())
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            bail!("Invalid storage key: '{}'", key);
        }
        Ok(self.base_directory.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;

        if !path.exists() {
            debug!("No file for key '{}' at {}", key, path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;

        // Atomic write using temp file
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved key '{}' ({} bytes)", key, value.len());
        Ok(())
    }
}
