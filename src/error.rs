use thiserror::Error;

/// Errors that can occur while decoding or encoding a portable pipeline document.
///
/// A document that cannot be parsed at all is the only hard failure in the codec;
/// everything downstream of a successful parse degrades per-entry and is reported
/// as import warnings instead.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse pipeline document: {0}")]
    Parse(String),

    #[error("Failed to serialize pipeline document: {0}")]
    Serialize(String),
}

/// Errors raised by the persistence layer backing the definition registry.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Failed to read key '{key}' from the catalog store: {message}")]
    Read { key: String, message: String },

    #[error("Failed to write key '{key}' to the catalog store: {message}")]
    Write { key: String, message: String },
}
