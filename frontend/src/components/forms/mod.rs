pub mod add_guest_form;
