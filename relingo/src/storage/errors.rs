//! Error types for storage operations

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Operation error
    #[error("Operation error: {0}")]
    Operation(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Data not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Operation(err.to_string())
    }
}
