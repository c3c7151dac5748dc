//! # Backend
//!
//! Contains all non-UI logic for the wedding guest manager.
//!
//! - **Domain**: the guest book (guests + tables), its mutations, the seating
//!   derivations and the transient planner session (tab, add-form draft, drag transfer)
//! - **Storage**: key-value persistence of the two collections
//! - **Manager**: ties the two together, persisting after every mutation
//!
//! The backend is UI-agnostic and compiles for `wasm32`; the Yew frontend plugs
//! in a `localStorage`-backed store, native code can use [`storage::FileStore`].
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! GuestManager (orchestration, persistence on change)
//!     ↓
//! Domain Layer (GuestBook, PlannerSession)
//!     ↓
//! Storage Layer (KeyValueStore, CollectionRepository)
//! ```

pub mod config;
pub mod domain;
pub mod manager;
pub mod storage;

pub use config::StorageKeys;
pub use domain::{DragTransfer, DropZone, GuestBook, PlannerSession, TableAssignment};
pub use manager::GuestManager;
pub use storage::{CollectionRepository, KeyValueStore, MemoryStore, StorageError};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
