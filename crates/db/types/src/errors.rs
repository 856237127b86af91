//! Low level store errors.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DbError {
    /// Underlying storage rejected the operation.
    #[error("IO error: {0}")]
    IoError(String),

    /// Stored bytes failed to decode.
    #[error("codec error: {0}")]
    CodecError(String),

    /// The store is held by another process or operation.
    #[error("resource busy")]
    Busy,

    #[error("{0}")]
    Other(String),
}

pub type DbResult<T> = Result<T, DbError>;
