//! In-memory stub store.

use parking_lot::Mutex;

use crate::{CheckpointDatabase, CheckpointRecord, DbResult, SignerBinding};

/// In-memory store for tests and early wiring.  Makes no durability
/// promises whatsoever.
#[derive(Debug, Default)]
pub struct StubCheckpointDb {
    state: Mutex<StubState>,
}

#[derive(Debug, Default)]
struct StubState {
    checkpoint: Option<CheckpointRecord>,
    binding: Option<SignerBinding>,
}

impl StubCheckpointDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CheckpointDatabase for StubCheckpointDb {
    fn get_checkpoint(&self) -> DbResult<Option<CheckpointRecord>> {
        Ok(self.state.lock().checkpoint)
    }

    fn put_checkpoint(&self, record: CheckpointRecord) -> DbResult<()> {
        self.state.lock().checkpoint = Some(record);
        Ok(())
    }

    fn reset_checkpoint(&self) -> DbResult<bool> {
        Ok(self.state.lock().checkpoint.take().is_some())
    }

    fn get_signer_binding(&self) -> DbResult<Option<SignerBinding>> {
        Ok(self.state.lock().binding)
    }

    fn put_signer_binding(&self, binding: SignerBinding) -> DbResult<()> {
        self.state.lock().binding = Some(binding);
        Ok(())
    }
}
