//! Startup failure taxonomy.

use keel_db_types::DbError;
use thiserror::Error;

/// Fatal failures from the startup bootstrap sequence.
///
/// Either variant aborts node initialization; none of these are retried.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The store rejected a read or write.  The store may be unwritable,
    /// full or held elsewhere; operator intervention required.
    #[error("checkpoint store rejected operation: {0}")]
    Persistence(#[from] DbError),

    /// Persisted data is internally inconsistent.  The operator must remove
    /// the checkpoint store and resynchronize.
    #[error("checkpoint store corrupted ({0}); remove the checkpoint store and resync")]
    Corruption(&'static str),
}
