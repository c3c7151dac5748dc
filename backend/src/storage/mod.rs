//! # Storage Module
//!
//! Persists the guest and table collections as JSON text under two keys.
//!
//! The raw seam is [`KeyValueStore`]: anything that can read and overwrite a
//! string by key (browser `localStorage`, a directory of files, an in-memory
//! map). [`CollectionRepository`] layers the typed collections on top and owns
//! the fallback-to-defaults policy for missing or malformed entries.
//!
//! ## Implementations
//!
//! - [`MemoryStore`]: shared in-process map, used by tests
//! - [`FileStore`]: one `<key>.json` file per entry in a data directory (native only)
//! - `BrowserStore`: lives in the frontend crate, wraps `window.localStorage`
//!
//! There is no versioning, migration or conflict detection: every save
//! overwrites the whole entry.

pub mod error;
pub mod memory;
pub mod repository;
pub mod traits;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use repository::CollectionRepository;
pub use traits::KeyValueStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
