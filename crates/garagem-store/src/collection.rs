//! Named JSON collections on top of a key-value store

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use garagem_types::{
    CollectionError, MessageKind, Notifier, SilentNotifier, STORAGE_ERROR_DURATION,
};

use crate::backend::KeyValueStore;

/// Reads and writes ordered JSON collections under string keys.
///
/// The `try_*` methods report failures as [`CollectionError`]. The plain
/// methods never fail: they log, notify the user when it makes sense, and
/// fall back to an empty collection or `false`.
pub struct CollectionStore<S> {
    backend: S,
    notifier: Box<dyn Notifier>,
}

impl<S: KeyValueStore> CollectionStore<S> {
    /// Collection store that does not notify anyone on failure
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            notifier: Box::new(SilentNotifier),
        }
    }

    /// Surface storage failures through `notifier`
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the collection under `key`.
    ///
    /// An absent value, or the literal text `null`/`undefined`, is an empty
    /// collection.
    pub fn try_get_collection<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Vec<T>, CollectionError> {
        check_key(key)?;

        let raw = self
            .backend
            .get_item(key)
            .map_err(|source| CollectionError::Read {
                key: key.to_string(),
                source,
            })?;

        match raw.as_deref() {
            None | Some("") | Some("null") | Some("undefined") => Ok(Vec::new()),
            Some(text) => serde_json::from_str(text).map_err(|source| CollectionError::Decode {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Read the collection under `key`, degrading every failure to an empty
    /// collection.
    pub fn get_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_get_collection(key) {
            Ok(items) => items,
            Err(err @ CollectionError::InvalidKey(_)) => {
                error!(error = %err, "invalid key passed to get_collection");
                Vec::new()
            }
            Err(err) => {
                error!(key, error = %err, "failed to read or decode stored collection");
                self.surface(&format!(
                    "Erro ao carregar dados ({key}). Verifique o console."
                ));
                Vec::new()
            }
        }
    }

    /// Encode `data` as JSON and store it under `key`.
    ///
    /// An absent payload (`None`) is stored as `null`.
    pub fn try_save_collection<T: Serialize + ?Sized>(
        &self,
        key: &str,
        data: &T,
    ) -> Result<(), CollectionError> {
        check_key(key)?;

        let encoded = serde_json::to_string(data).map_err(|source| CollectionError::Encode {
            key: key.to_string(),
            source,
        })?;

        self.backend
            .set_item(key, &encoded)
            .map_err(|source| CollectionError::Write {
                key: key.to_string(),
                source,
            })?;

        debug!(key, bytes = encoded.len(), "saved collection");
        Ok(())
    }

    /// Store `data` under `key`; returns whether the write succeeded.
    pub fn save_collection<T: Serialize + ?Sized>(&self, key: &str, data: &T) -> bool {
        match self.try_save_collection(key, data) {
            Ok(()) => true,
            Err(err @ CollectionError::InvalidKey(_)) => {
                error!(error = %err, "invalid key passed to save_collection");
                false
            }
            Err(err) => {
                error!(key, error = %err, "failed to save collection");
                let message = if err.is_quota_exceeded() {
                    format!("Erro: Não há espaço suficiente para salvar os dados. ({key})")
                } else {
                    format!("Erro ao salvar dados ({key}). Verifique o console.")
                };
                self.surface(&message);
                false
            }
        }
    }

    /// Best-effort user notification; a failing notifier is only logged
    fn surface(&self, message: &str) {
        if let Err(err) = self
            .notifier
            .notify(message, MessageKind::Error, STORAGE_ERROR_DURATION)
        {
            error!(error = %err, "failed to show storage error message");
        }
    }
}

fn check_key(key: &str) -> Result<(), CollectionError> {
    if key.trim().is_empty() {
        return Err(CollectionError::InvalidKey(key.to_string()));
    }
    Ok(())
}
