use log::{debug, info, warn};
use shared::{default_guests, default_tables, Guest, GuestDraft, GuestId, GuestStatus, Table, TableId};

/// The guest and table collections
///
/// Mutations report whether anything changed so callers know when to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestBook {
    guests: Vec<Guest>,
    tables: Vec<Table>,
}

impl Default for GuestBook {
    fn default() -> Self {
        Self::seeded()
    }
}

impl GuestBook {
    pub fn new(guests: Vec<Guest>, tables: Vec<Table>) -> Self {
        Self { guests, tables }
    }

    /// The six sample guests and four tables used on first run
    pub fn seeded() -> Self {
        Self::new(default_guests(), default_tables())
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Append a guest built from `draft`
    ///
    /// Returns the new id, or `None` (and leaves the list untouched) when the
    /// last name, first name or email is empty, or when no id is left.
    pub fn add_guest(&mut self, draft: &GuestDraft) -> Option<GuestId> {
        if !draft.is_complete() {
            debug!("Ignoring incomplete guest draft");
            return None;
        }

        let Some(id) = Guest::next_id(&self.guests) else {
            warn!("Guest ids exhausted, not adding {} {}", draft.first_name, draft.last_name);
            return None;
        };
        let guest = draft.clone().into_guest(id);
        info!("Adding guest {}: {}", id, guest.full_name());
        self.guests.push(guest);
        Some(id)
    }

    /// Remove a guest; `false` if no guest has this id
    pub fn delete_guest(&mut self, id: GuestId) -> bool {
        let before = self.guests.len();
        self.guests.retain(|g| g.id != id);

        let deleted = self.guests.len() != before;
        if deleted {
            info!("Deleted guest {}", id);
        } else {
            debug!("Delete ignored, guest {} not found", id);
        }
        deleted
    }

    /// Set a guest's RSVP status, leaving any table reference as is
    pub fn update_guest_status(&mut self, id: GuestId, status: GuestStatus) -> bool {
        match self.guest_mut(id) {
            Some(guest) => {
                info!("Guest {} status {} -> {}", id, guest.status, status);
                guest.status = status;
                true
            }
            None => {
                debug!("Status update ignored, guest {} not found", id);
                false
            }
        }
    }

    /// Point a guest at a table (or at no table); capacity and existence are not checked
    pub fn reassign_guest(&mut self, id: GuestId, table_id: Option<TableId>) -> bool {
        match self.guest_mut(id) {
            Some(guest) => {
                info!("Guest {} table {:?} -> {:?}", id, guest.table_id, table_id);
                guest.table_id = table_id;
                true
            }
            None => {
                debug!("Reassignment ignored, guest {} not found", id);
                false
            }
        }
    }

    fn guest_mut(&mut self, id: GuestId) -> Option<&mut Guest> {
        self.guests.iter_mut().find(|g| g.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(last: &str, first: &str, email: &str) -> GuestDraft {
        GuestDraft {
            last_name: last.to_string(),
            first_name: first.to_string(),
            email: email.to_string(),
            dietary_notes: "Sans lactose".to_string(),
        }
    }

    #[test]
    fn test_add_guest() {
        let mut book = GuestBook::seeded();

        let id = book.add_guest(&draft("Petit", "Lucie", "lucie@email.com"));
        assert_eq!(id, Some(7));
        assert_eq!(book.guests().len(), 7);

        let guest = book.guests().last().unwrap();
        assert_eq!(guest.status, GuestStatus::Invited);
        assert_eq!(guest.table_id, None);
        assert_eq!(guest.dietary_notes, "Sans lactose");
    }

    #[test]
    fn test_add_guest_to_empty_book() {
        let mut book = GuestBook::new(Vec::new(), default_tables());
        assert_eq!(book.add_guest(&draft("Petit", "Lucie", "l@e.fr")), Some(1));
    }

    #[test]
    fn test_add_incomplete_guest_is_noop() {
        let mut book = GuestBook::seeded();

        assert_eq!(book.add_guest(&draft("", "Lucie", "l@e.fr")), None);
        assert_eq!(book.add_guest(&draft("Petit", "", "l@e.fr")), None);
        assert_eq!(book.add_guest(&draft("Petit", "Lucie", "")), None);
        assert_eq!(book, GuestBook::seeded());
    }

    #[test]
    fn test_add_guest_accepts_whitespace_fields() {
        let mut book = GuestBook::seeded();

        assert_eq!(book.add_guest(&draft(" ", "Lucie", "l@e.fr")), Some(7));
        assert_eq!(book.guests().last().unwrap().last_name, " ");
    }

    #[test]
    fn test_add_guest_when_ids_exhausted() {
        let mut guests = default_guests();
        guests[0].id = GuestId::MAX;
        let mut book = GuestBook::new(guests, default_tables());
        let before = book.clone();

        assert_eq!(book.add_guest(&draft("Petit", "Lucie", "l@e.fr")), None);
        assert_eq!(book, before);
    }

    #[test]
    fn test_delete_guest() {
        let mut book = GuestBook::seeded();

        assert!(book.delete_guest(6));
        assert_eq!(book.guests().len(), 5);
        assert!(book.guests().iter().all(|g| g.id != 6));

        assert!(!book.delete_guest(6));
        assert!(!book.delete_guest(42));
        assert_eq!(book.guests().len(), 5);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut book = GuestBook::seeded();
        book.delete_guest(3);

        let id = book.add_guest(&draft("Petit", "Lucie", "l@e.fr"));
        assert_eq!(id, Some(7));
    }

    #[test]
    fn test_update_status_keeps_table() {
        let mut book = GuestBook::seeded();

        assert!(book.update_guest_status(1, GuestStatus::Declined));
        let guest = &book.guests()[0];
        assert_eq!(guest.status, GuestStatus::Declined);
        assert_eq!(guest.table_id, Some(1));

        assert!(!book.update_guest_status(99, GuestStatus::Confirmed));
    }

    #[test]
    fn test_reassign_guest() {
        let mut book = GuestBook::seeded();

        assert!(book.reassign_guest(6, Some(3)));
        assert_eq!(book.guests()[5].table_id, Some(3));

        // No existence check on the table id
        assert!(book.reassign_guest(6, Some(77)));
        assert_eq!(book.guests()[5].table_id, Some(77));

        assert!(book.reassign_guest(6, None));
        assert_eq!(book.guests()[5].table_id, None);

        assert!(!book.reassign_guest(99, Some(1)));
    }
}
