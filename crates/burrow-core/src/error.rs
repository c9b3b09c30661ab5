use thiserror::Error;

/// Errors returned by a [`Storage`](crate::Storage) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("key not found in store: {0}")]
    KeyNotFound(String),
}

/// Errors returned by a [`Hasher`](crate::Hasher) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("failed to create encoder: {0}")]
    EncoderInit(String),
    #[error("failed to encode seed {seed}: {reason}")]
    Encoding { seed: i64, reason: String },
    #[error("failed to decode short code: {0}")]
    Decoding(String),
}
