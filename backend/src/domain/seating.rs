//! Seating derivations over a [`GuestBook`].
//!
//! Everything here is recomputed from the collections on every call; with a
//! few dozen guests there is nothing worth caching.

use shared::{
    Guest, GuestId, GuestStatus, StatusCounts, Table, TableId, TableOccupancy, UNASSIGNED_LABEL,
    UNKNOWN_TABLE_LABEL,
};

use super::guest_book::GuestBook;

/// Where a guest's table reference points, whatever their status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAssignment<'a> {
    Unassigned,
    Table(&'a Table),
    /// Reference to a table id that does not exist
    Unknown(TableId),
}

impl TableAssignment<'_> {
    pub fn label(&self) -> &str {
        match self {
            TableAssignment::Unassigned => UNASSIGNED_LABEL,
            TableAssignment::Table(table) => &table.name,
            TableAssignment::Unknown(_) => UNKNOWN_TABLE_LABEL,
        }
    }
}

impl GuestBook {
    pub fn find_guest(&self, id: GuestId) -> Option<&Guest> {
        self.guests().iter().find(|g| g.id == id)
    }

    pub fn find_table(&self, id: TableId) -> Option<&Table> {
        self.tables().iter().find(|t| t.id == id)
    }

    /// Confirmed guests seated at `table_id`
    pub fn guests_at_table(&self, table_id: TableId) -> Vec<&Guest> {
        self.guests()
            .iter()
            .filter(|g| g.is_confirmed() && g.table_id == Some(table_id))
            .collect()
    }

    /// Confirmed guests without a table
    pub fn unassigned_guests(&self) -> Vec<&Guest> {
        self.guests()
            .iter()
            .filter(|g| g.is_confirmed() && g.table_id.is_none())
            .collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        let count = |status: GuestStatus| self.guests().iter().filter(|g| g.status == status).count();

        StatusCounts {
            total: self.guests().len(),
            confirmed: count(GuestStatus::Confirmed),
            pending: count(GuestStatus::Invited),
            declined: count(GuestStatus::Declined),
            assigned: self
                .guests()
                .iter()
                .filter(|g| g.is_confirmed() && g.table_id.is_some())
                .count(),
        }
    }

    /// Confirmed guests at `table` over its capacity; exceeds 1.0 when over-full
    pub fn occupancy_ratio(&self, table: &Table) -> f64 {
        self.occupancy(table).ratio()
    }

    /// Occupancy of every table, in table order
    pub fn table_occupancy(&self) -> Vec<TableOccupancy> {
        self.tables().iter().map(|t| self.occupancy(t)).collect()
    }

    pub fn table_assignment(&self, guest: &Guest) -> TableAssignment<'_> {
        match guest.table_id {
            None => TableAssignment::Unassigned,
            Some(id) => self
                .find_table(id)
                .map_or(TableAssignment::Unknown(id), TableAssignment::Table),
        }
    }

    /// Plain-text overview: header summary, one line per table, unassigned count
    pub fn seating_report(&self) -> String {
        let mut lines = vec![self.status_counts().summary()];
        for occupancy in self.table_occupancy() {
            let marker = if occupancy.is_full() { " (complète)" } else { "" };
            lines.push(format!(
                "{}: {}/{}{}",
                occupancy.name, occupancy.seated, occupancy.capacity, marker
            ));
        }
        lines.push(format!("Invités non assignés: {}", self.unassigned_guests().len()));
        lines.join("\n")
    }

    fn occupancy(&self, table: &Table) -> TableOccupancy {
        TableOccupancy {
            table_id: table.id,
            name: table.name.clone(),
            seated: self.guests_at_table(table.id).len(),
            capacity: table.capacity,
        }
    }
}
