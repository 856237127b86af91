//! Trait definitions for the checkpoint store interface.

use crate::{
    types::{CheckpointRecord, SignerBinding},
    DbResult,
};

/// Durable key-value persistence for the synchronized checkpoint state.
///
/// Implementations define their own on-disk layout and internal locking;
/// operations are small, local and synchronous.  Callers serialize
/// read-modify-write spans themselves, the store only promises that each
/// individual operation either applies fully or reports an error.
pub trait CheckpointDatabase: Send + Sync + 'static {
    /// Gets the current checkpoint record, if one has been written.
    fn get_checkpoint(&self) -> DbResult<Option<CheckpointRecord>>;

    /// Writes the checkpoint record, replacing any existing one.
    fn put_checkpoint(&self, record: CheckpointRecord) -> DbResult<()>;

    /// Clears the stored checkpoint record, returning whether one existed.
    fn reset_checkpoint(&self) -> DbResult<bool>;

    /// Gets the persisted signer binding, if any.
    fn get_signer_binding(&self) -> DbResult<Option<SignerBinding>>;

    /// Writes the signer binding, replacing any existing one.
    fn put_signer_binding(&self, binding: SignerBinding) -> DbResult<()>;
}
