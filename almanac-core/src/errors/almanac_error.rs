use super::{ConfigError, StorageError, ValidationError};

/// Top-level error for every Almanac operation.
#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    #[error("content item not found: {id}")]
    ItemNotFound { id: u64 },

    #[error("invalid tree path: {path:?} ({reason})")]
    InvalidPath { path: String, reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type AlmanacResult<T> = Result<T, AlmanacError>;
