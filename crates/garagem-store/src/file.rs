//! Directory-backed key-value store
//!
//! Each key lives in its own `<encoded key>.json` file under the store
//! directory.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use garagem_types::{Result, StoreError};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::backend::KeyValueStore;

const FILE_EXTENSION: &str = "json";

/// File-per-key store with an optional byte quota over the whole directory
#[derive(Debug, Clone)]
pub struct FileStore {
    store_dir: PathBuf,
    quota_bytes: Option<u64>,
}

impl FileStore {
    /// Create or open a store rooted at `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_dir,
            quota_bytes: None,
        })
    }

    /// Reject writes that would grow the directory past `quota_bytes`
    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.store_dir
            .join(format!("{}.{}", encode_key(key), FILE_EXTENSION))
    }

    /// Total size of every stored value except the one under `skip`
    fn used_bytes_except(&self, skip: &Path) -> std::result::Result<u64, StoreError> {
        let mut total = 0;
        for entry in fs::read_dir(&self.store_dir)? {
            let path = entry?.path();
            if path == skip || path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            total += fs::metadata(&path)?.len();
        }
        Ok(total)
    }
}

/// Encode a key into a file stem: ASCII alphanumerics, `-` and `_` are kept,
/// every other byte becomes `%XX`, so distinct keys never share a file.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

/// Replace `target` with whatever `write` puts in a temporary file next to
/// it. The previous content stays in place unless the whole write succeeds.
fn replace_file(
    target: &Path,
    write: impl FnOnce(&mut NamedTempFile) -> io::Result<()>,
) -> io::Result<()> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    write(&mut tmp)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

fn map_write_error(key: &str, needed: u64, err: std::io::Error) -> StoreError {
    match err.kind() {
        ErrorKind::StorageFull => StoreError::QuotaExceeded {
            key: key.to_string(),
            needed,
            available: 0,
        },
        _ => StoreError::Io(err),
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        let path = self.path_for(key);
        let needed = value.len() as u64;

        if let Some(quota) = self.quota_bytes {
            let others = self.used_bytes_except(&path)?;
            if others + needed > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    available: quota.saturating_sub(others),
                });
            }
        }

        replace_file(&path, |tmp| tmp.write_all(value.as_bytes()))
            .map_err(|e| map_write_error(key, needed, e))?;
        debug!(key, path = %path.display(), bytes = needed, "stored item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> std::result::Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}
