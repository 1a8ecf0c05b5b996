//! Common error types for Podium

use thiserror::Error;

/// Common result type for Podium operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared across the Podium services
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request field
    #[error("{0}")]
    InvalidInput(String),
}
