use log::debug;
use shared::{GuestId, TableId};

/// Drop target in the table planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropZone {
    Table(TableId),
    /// The pool of confirmed guests without a table
    Unassigned,
}

impl DropZone {
    /// Table reference a guest dropped here ends up with
    pub fn target_table(&self) -> Option<TableId> {
        match self {
            DropZone::Table(id) => Some(*id),
            DropZone::Unassigned => None,
        }
    }
}

/// The guest picked up by the current drag, if any
///
/// Single pointer, so at most one transfer is ever pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTransfer {
    pending: Option<GuestId>,
}

impl DragTransfer {
    pub fn pick_up(&mut self, guest_id: GuestId) {
        debug!("Picked up guest {}", guest_id);
        self.pending = Some(guest_id);
    }

    pub fn pending(&self) -> Option<GuestId> {
        self.pending
    }

    /// Consume the pending subject; a drop always ends the transfer
    pub fn take(&mut self) -> Option<GuestId> {
        self.pending.take()
    }
}
