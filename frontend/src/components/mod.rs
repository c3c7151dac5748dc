pub mod dashboard;
pub mod forms;
pub mod guest_list;
pub mod header;
pub mod tab_nav;
pub mod table_planner;
