//! Native entry point: opens the guest book in the data directory and prints
//! the seating overview.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use backend::{FileStore, GuestManager};
    use log::info;

    env_logger::init();

    let store = FileStore::new_default()?;
    info!("Reading guest book from {}", store.base_directory().display());

    let manager = GuestManager::open(store);
    println!("{}", manager.book().seating_report());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
