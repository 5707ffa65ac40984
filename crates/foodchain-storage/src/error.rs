//! Error types for foodchain-storage

use thiserror::Error;

/// Result type alias for foodchain-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in foodchain-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The database rejected a query or could not be reached
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem error while preparing the database location
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
