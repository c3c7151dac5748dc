pub mod browser_store;
pub mod logging;
