//! Persistence for garagem collections
//!
//! A collection is an ordered JSON array stored under one key of a
//! [`KeyValueStore`]. [`CollectionStore`] reads and writes those arrays and
//! turns every failure into a safe default plus a user notification.

mod backend;
mod collection;
mod constants;
mod file;
mod memory;

pub use backend::KeyValueStore;
pub use collection::CollectionStore;
pub use constants::{MAINTENANCES_KEY, VEHICLES_KEY};
pub use file::FileStore;
pub use memory::MemoryStore;
