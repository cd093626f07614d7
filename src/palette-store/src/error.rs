//! Error types for palette-store.

use thiserror::Error;

/// Storage error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite error (constraint violations, I/O, corruption).
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Database was written by a newer binary.
    #[error("unsupported schema version {db_version} (latest supported: {latest_supported})")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },

    /// Home directory not found.
    #[error("could not determine home/data directory")]
    HomeDirNotFound,

    /// IO error while preparing the database location.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
