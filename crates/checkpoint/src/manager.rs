//! Shared checkpoint state handle.

use std::sync::Arc;

use keel_db_types::CheckpointDatabase;
use parking_lot::Mutex;

/// Owner of the persisted synchronized-checkpoint state.
///
/// One lock guards every read-modify-write span over the store together
/// with the process-lifetime provisioning latches; each sequence holds the
/// guard end to end so a key-rotation reset cannot interleave with another
/// writer.  When the wallet is also needed it is entered with this lock
/// already held, never the reverse.
#[derive(Debug)]
pub struct CheckpointManager<D> {
    pub(crate) db: Arc<D>,
    pub(crate) state: Mutex<ProvisionState>,
}

/// Process-lifetime provisioning latches.  Transitions are false to true
/// only.
#[derive(Debug, Default)]
pub(crate) struct ProvisionState {
    /// Set once the store binding has been initialized.
    pub(crate) init_done: bool,

    /// Set once the checkpoint signing key has been installed.
    pub(crate) master_key_set: bool,
}

impl<D: CheckpointDatabase> CheckpointManager<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self {
            db,
            state: Mutex::new(ProvisionState::default()),
        }
    }

    pub fn db(&self) -> &Arc<D> {
        &self.db
    }

    /// Whether the checkpoint signing key has been installed.
    pub fn is_master_key_set(&self) -> bool {
        self.state.lock().master_key_set
    }
}
