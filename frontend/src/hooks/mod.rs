pub mod use_guest_manager;
