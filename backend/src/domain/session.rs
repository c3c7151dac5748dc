//! Transient view state of the planner.
//!
//! Nothing here is persisted: the active tab, the add-guest form and the
//! drag transfer reset on every page load.

use log::debug;
use shared::{ActiveTab, DraftField, GuestDraft, GuestId};

use super::drag_drop::{DragTransfer, DropZone};
use super::guest_book::GuestBook;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerSession {
    active_tab: ActiveTab,
    draft: GuestDraft,
    add_form_visible: bool,
    transfer: DragTransfer,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn draft(&self) -> &GuestDraft {
        &self.draft
    }

    pub fn is_add_form_visible(&self) -> bool {
        self.add_form_visible
    }

    pub fn transfer(&self) -> &DragTransfer {
        &self.transfer
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        debug!("Switching to tab {}", tab.id());
        self.active_tab = tab;
    }

    pub fn show_add_form(&mut self) {
        self.add_form_visible = true;
    }

    /// Hide the form; whatever was typed stays in the draft
    pub fn cancel_add_form(&mut self) {
        self.add_form_visible = false;
    }

    pub fn edit_draft(&mut self, field: DraftField, value: String) {
        self.draft.set_field(field, value);
    }

    /// Add the drafted guest to `book`
    ///
    /// On success the draft is cleared and the form hidden; an incomplete
    /// draft leaves both the book and the form untouched.
    pub fn submit_draft(&mut self, book: &mut GuestBook) -> Option<GuestId> {
        let id = book.add_guest(&self.draft)?;
        self.draft = GuestDraft::default();
        self.add_form_visible = false;
        Some(id)
    }

    pub fn pick_up(&mut self, guest_id: GuestId) {
        self.transfer.pick_up(guest_id);
    }

    /// Commit the pending transfer onto `zone`
    ///
    /// Returns the moved guest, `None` when nothing was picked up or the
    /// guest no longer exists.
    pub fn drop_on(&mut self, zone: DropZone, book: &mut GuestBook) -> Option<GuestId> {
        let Some(guest_id) = self.transfer.take() else {
            debug!("Drop on {:?} with nothing picked up", zone);
            return None;
        };

        book.reassign_guest(guest_id, zone.target_table())
            .then_some(guest_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GuestStatus;

    fn fill_draft(session: &mut PlannerSession) {
        session.edit_draft(DraftField::LastName, "Petit".to_string());
        session.edit_draft(DraftField::FirstName, "Lucie".to_string());
        session.edit_draft(DraftField::Email, "lucie.petit@email.com".to_string());
        session.edit_draft(DraftField::DietaryNotes, "Halal".to_string());
    }

    #[test]
    fn test_initial_state() {
        let session = PlannerSession::new();
        assert_eq!(session.active_tab(), ActiveTab::Dashboard);
        assert!(!session.is_add_form_visible());
        assert_eq!(session.draft(), &GuestDraft::default());
        assert_eq!(session.transfer().pending(), None);
    }

    #[test]
    fn test_submit_clears_draft_and_hides_form() {
        let mut book = GuestBook::seeded();
        let mut session = PlannerSession::new();
        session.show_add_form();
        fill_draft(&mut session);

        assert_eq!(session.submit_draft(&mut book), Some(7));
        assert!(!session.is_add_form_visible());
        assert_eq!(session.draft(), &GuestDraft::default());
        assert_eq!(book.find_guest(7).unwrap().dietary_notes, "Halal");
    }

    #[test]
    fn test_incomplete_submit_keeps_form_open() {
        let mut book = GuestBook::seeded();
        let mut session = PlannerSession::new();
        session.show_add_form();
        session.edit_draft(DraftField::LastName, "Petit".to_string());

        assert_eq!(session.submit_draft(&mut book), None);
        assert!(session.is_add_form_visible());
        assert_eq!(session.draft().last_name, "Petit");
        assert_eq!(book.guests().len(), 6);
    }

    #[test]
    fn test_cancel_keeps_draft() {
        let mut session = PlannerSession::new();
        session.show_add_form();
        fill_draft(&mut session);

        session.cancel_add_form();
        assert!(!session.is_add_form_visible());
        assert_eq!(session.draft().first_name, "Lucie");
    }

    #[test]
    fn test_drag_and_drop_reassigns() {
        let mut book = GuestBook::seeded();
        let mut session = PlannerSession::new();

        session.pick_up(6);
        assert_eq!(session.drop_on(DropZone::Table(3), &mut book), Some(6));
        assert_eq!(book.find_guest(6).unwrap().table_id, Some(3));
        assert_eq!(session.transfer().pending(), None);

        session.pick_up(1);
        assert_eq!(session.drop_on(DropZone::Unassigned, &mut book), Some(1));
        assert_eq!(book.find_guest(1).unwrap().table_id, None);
        assert_eq!(book.unassigned_guests().len(), 1);
    }

    #[test]
    fn test_drop_without_pick_up_is_noop() {
        let mut book = GuestBook::seeded();
        let mut session = PlannerSession::new();

        assert_eq!(session.drop_on(DropZone::Table(1), &mut book), None);
        assert_eq!(book, GuestBook::seeded());
    }

    #[test]
    fn test_drop_after_delete_clears_transfer() {
        let mut book = GuestBook::seeded();
        let mut session = PlannerSession::new();

        session.pick_up(4);
        book.delete_guest(4);
        assert_eq!(session.drop_on(DropZone::Table(1), &mut book), None);
        assert_eq!(session.transfer().pending(), None);
    }

    #[test]
    fn test_drops_accumulate_at_table() {
        let mut book = GuestBook::seeded();
        let mut session = PlannerSession::new();
        book.update_guest_status(3, GuestStatus::Confirmed);

        for id in [3, 6] {
            session.pick_up(id);
            session.drop_on(DropZone::Table(2), &mut book);
        }
        assert_eq!(book.guests_at_table(2).len(), 3);
    }
}
