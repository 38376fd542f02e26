//! Error types for clinked-core.
//!
//! The predicate builder and in-memory evaluation are total; everything here
//! comes from the request boundary, storage, or configuration.

use thiserror::Error;

/// Main error type for clinked-core.
#[derive(Debug, Error)]
pub enum Error {
    /// A paging parameter outside its enumerated bounds.
    #[error("invalid argument `{name}`: {value} is outside {min}..={max}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage lock poisoned")]
    LockPoisoned,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors the caller caused with bad input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Error::LockPoisoned
    }
}

/// Result alias used across clinked-core.
pub type Result<T> = std::result::Result<T, Error>;
