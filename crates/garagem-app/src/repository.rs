//! Opening the persistent stores described by a [`Config`]

use std::path::PathBuf;

use garagem_store::{CollectionStore, FileStore};
use garagem_types::{Notifier, Result};
use garagem_ui::{Document, StatusDisplay};

use crate::config::Config;
use crate::garage::Garage;
use crate::page::GaragePage;

/// Open the file-backed key-value store, applying the configured quota
pub fn open_file_store(config: &Config) -> Result<FileStore> {
    open_file_store_at(config.store_dir()?, config.storage_quota_bytes)
}

/// Open a file-backed key-value store at a custom directory
pub fn open_file_store_at(store_dir: PathBuf, quota_bytes: Option<u64>) -> Result<FileStore> {
    let store = FileStore::open(store_dir)?;
    Ok(match quota_bytes {
        Some(quota) => store.with_quota(quota),
        None => store,
    })
}

/// Open the garage over the configured store, reporting storage failures
/// through `notifier`
pub fn open_garage(
    config: &Config,
    notifier: impl Notifier + 'static,
) -> Result<Garage<FileStore>> {
    let store = CollectionStore::new(open_file_store(config)?).with_notifier(notifier);
    Ok(Garage::new(store).with_year_range(config.year_range()))
}

/// Build the page controller over `document`, with the configured store,
/// year range and status duration
pub fn open_page(config: &Config, document: Document) -> Result<GaragePage<FileStore>> {
    let status = StatusDisplay::new(document.clone()).with_duration(config.status_duration());
    let garage = open_garage(config, status.clone())?;
    Ok(GaragePage::new(document, status, garage))
}
