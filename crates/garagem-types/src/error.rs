//! Error types for garagem

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised by a key-value backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write would exceed the backend's storage quota
    #[error("Storage quota exceeded for '{key}' ({needed} bytes needed, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: u64,
        available: u64,
    },

    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StoreError::QuotaExceeded { .. })
    }
}

/// Failures at the collection boundary (read/decode or encode/write of a named collection)
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Failed to read collection '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("Failed to decode collection '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode collection '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write collection '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: StoreError,
    },
}

impl CollectionError {
    /// True when the underlying write failed because storage is full
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, CollectionError::Write { source, .. } if source.is_quota_exceeded())
    }
}

/// Failure to surface a message to the user
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Status target '{0}' not found")]
    TargetMissing(String),

    #[error("Notification failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An operation refused by the garage; the message is for the user
    #[error("{0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, Error>;
