//! # Guest Manager
//!
//! The application state the UI drives: the [`GuestBook`], the
//! [`PlannerSession`] and the repository they persist to.
//!
//! Every operation that changes a collection writes the whole collection back
//! immediately. Storage failures are logged and otherwise ignored: the change
//! stays in memory and the next successful save catches the store up.

use log::{info, warn};
use shared::{ActiveTab, DraftField, GuestDraft, GuestId, GuestStatus, TableId};

use crate::config::StorageKeys;
use crate::domain::{DropZone, GuestBook, PlannerSession};
use crate::storage::{CollectionRepository, KeyValueStore};

#[derive(Debug, Clone)]
pub struct GuestManager<S> {
    book: GuestBook,
    session: PlannerSession,
    repository: CollectionRepository<S>,
}

impl<S: KeyValueStore> GuestManager<S> {
    /// Load both collections from `store` under the default keys
    pub fn open(store: S) -> Self {
        Self::open_with_keys(store, StorageKeys::default())
    }

    /// Load both collections, falling back to the seed data for anything
    /// missing or unreadable, then write the resulting snapshot back
    pub fn open_with_keys(store: S, keys: StorageKeys) -> Self {
        let repository = CollectionRepository::new(store, keys);
        let book = GuestBook::new(
            repository.load_guests_or_default(),
            repository.load_tables_or_default(),
        );
        info!(
            "Opened guest book: {} guests, {} tables",
            book.guests().len(),
            book.tables().len()
        );

        let manager = Self {
            book,
            session: PlannerSession::new(),
            repository,
        };
        manager.persist_guests();
        manager.persist_tables();
        manager
    }

    pub fn book(&self) -> &GuestBook {
        &self.book
    }

    pub fn session(&self) -> &PlannerSession {
        &self.session
    }

    pub fn repository(&self) -> &CollectionRepository<S> {
        &self.repository
    }

    pub fn add_guest(&mut self, draft: &GuestDraft) -> Option<GuestId> {
        let id = self.book.add_guest(draft)?;
        self.persist_guests();
        Some(id)
    }

    /// Add the guest drafted in the session's add-form
    pub fn submit_draft(&mut self) -> Option<GuestId> {
        let id = self.session.submit_draft(&mut self.book)?;
        self.persist_guests();
        Some(id)
    }

    pub fn delete_guest(&mut self, id: GuestId) -> bool {
        self.persist_guests_if(|book| book.delete_guest(id))
    }

    pub fn update_guest_status(&mut self, id: GuestId, status: GuestStatus) -> bool {
        self.persist_guests_if(|book| book.update_guest_status(id, status))
    }

    pub fn reassign_guest(&mut self, id: GuestId, table_id: Option<TableId>) -> bool {
        self.persist_guests_if(|book| book.reassign_guest(id, table_id))
    }

    /// Start a drag of `guest_id`
    pub fn pick_up(&mut self, guest_id: GuestId) {
        self.session.pick_up(guest_id);
    }

    /// Finish the current drag on `zone`; `false` if nothing moved
    pub fn drop_on(&mut self, zone: DropZone) -> bool {
        let moved = self.session.drop_on(zone, &mut self.book).is_some();
        if moved {
            self.persist_guests();
        }
        moved
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.session.select_tab(tab);
    }

    pub fn show_add_form(&mut self) {
        self.session.show_add_form();
    }

    pub fn cancel_add_form(&mut self) {
        self.session.cancel_add_form();
    }

    pub fn edit_draft(&mut self, field: DraftField, value: String) {
        self.session.edit_draft(field, value);
    }

    fn persist_guests_if(&mut self, mutation: impl FnOnce(&mut GuestBook) -> bool) -> bool {
        let changed = mutation(&mut self.book);
        if changed {
            self.persist_guests();
        }
        changed
    }

    fn persist_guests(&self) {
        if let Err(e) = self.repository.save_guests(self.book.guests()) {
            warn!("Failed to save guests: {}", e);
        }
    }

    fn persist_tables(&self) {
        if let Err(e) = self.repository.save_tables(self.book.tables()) {
            warn!("Failed to save tables: {}", e);
        }
    }
}
