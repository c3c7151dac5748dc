//! # Domain Module
//!
//! Business rules of the guest manager, independent of storage and UI.
//!
//! - **guest_book**: the two in-memory collections and the guest mutations
//! - **seating**: read-only derivations (who sits where, counts, occupancy)
//! - **drag_drop**: the pick-up / drop transfer used to reassign tables
//! - **session**: transient view state (active tab, add-form draft, pending transfer)
//!
//! ## Business Rules
//!
//! - Only confirmed guests are seated; a stale `table_id` on an invited or
//!   declined guest is kept but ignored by the seating derivations
//! - Capacity is a soft limit: over-full tables are flagged, never refused
//! - Table references are not checked; unknown ids resolve to "Table inconnue"
//! - Operations on unknown guest ids are silent no-ops

pub mod drag_drop;
pub mod guest_book;
pub mod seating;
pub mod session;

pub use drag_drop::{DragTransfer, DropZone};
pub use guest_book::GuestBook;
pub use seating::TableAssignment;
pub use session::PlannerSession;
