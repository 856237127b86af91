//! Startup bootstrap of the persisted checkpoint state.

use keel_db_types::{CheckpointDatabase, CheckpointRecord, SignerBinding};
use keel_params::ActivationParams;
use tracing::*;

use crate::{BlockIndex, CheckpointManager, StartupError};

impl<D: CheckpointDatabase> CheckpointManager<D> {
    /// Establishes and verifies the persisted checkpoint state.
    ///
    /// Runs once during node initialization, before the wallet is loaded.
    /// A fresh install converges to a genesis-anchored, correctly-keyed
    /// state in one pass; a signer-key rotation is healed by rebinding to
    /// the expected key and dropping the checkpoint trusted under the old
    /// one.  Every step is a hard gate: the first failure aborts the
    /// sequence.  Must complete before block processing consults persisted
    /// checkpoint data.
    pub fn open_at_startup(
        &self,
        expected: &ActivationParams,
        index: &impl BlockIndex,
    ) -> Result<(), StartupError> {
        let _state = self.state.lock();

        let record = match self.db.get_checkpoint()? {
            Some(record) => record,
            None => {
                // Genesis bootstrap: create the missing records under the
                // expected key, then read back to prove the store holds
                // them.  A pre-existing binding is left for the rotation
                // check below.
                let genesis = CheckpointRecord::new(index.genesis_id());
                self.db.put_checkpoint(genesis)?;
                if self.db.get_signer_binding()?.is_none() {
                    self.db
                        .put_signer_binding(SignerBinding::new(*expected.signer_key()))?;
                }
                self.db.get_checkpoint()?.ok_or(StartupError::Corruption(
                    "checkpoint unreadable after genesis init",
                ))?
            }
        };

        if !index.contains(&record.block_id()) {
            return Err(StartupError::Corruption(
                "checkpoint block not in local index",
            ));
        }
        info!(checkpoint = %record, "using synchronized checkpoint");

        let stored = self.db.get_signer_binding()?;
        let key_matches = stored
            .as_ref()
            .is_some_and(|binding| binding.key() == expected.signer_key());
        if !key_matches {
            match &stored {
                Some(binding) => info!(
                    stored = %binding.key(),
                    expected = %expected.signer_key(),
                    "checkpoint signer key changed, rebinding"
                ),
                None => info!(
                    expected = %expected.signer_key(),
                    "no signer binding on record, rebinding"
                ),
            }

            // A checkpoint trusted under a stale key must not stay trusted.
            self.db
                .put_signer_binding(SignerBinding::new(*expected.signer_key()))?;
            self.db.reset_checkpoint()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use keel_db_types::{stubs::StubCheckpointDb, CheckpointRecord, SignerBinding};

    use super::*;
    use crate::testutil::{test_params, FailingDb, StubBlockIndex};

    #[test]
    fn test_fresh_store_heals_to_genesis() {
        let db = Arc::new(StubCheckpointDb::new());
        let manager = CheckpointManager::new(db.clone());
        let index = StubBlockIndex::new();
        let expected = test_params(1);

        manager.open_at_startup(&expected, &index).unwrap();

        let record = db.get_checkpoint().unwrap().unwrap();
        assert_eq!(record.block_id(), index.genesis_id());

        let binding = db.get_signer_binding().unwrap().unwrap();
        assert_eq!(binding.key(), expected.signer_key());
    }

    #[test]
    fn test_genesis_write_failure_is_fatal() {
        let db = Arc::new(FailingDb::new());
        db.fail_put_checkpoint(true);
        let manager = CheckpointManager::new(db);
        let index = StubBlockIndex::new();

        let err = manager
            .open_at_startup(&test_params(1), &index)
            .unwrap_err();
        assert!(matches!(err, StartupError::Persistence(_)));
    }

    #[test]
    fn test_unknown_checkpoint_block_is_corruption() {
        let db = Arc::new(StubCheckpointDb::new());
        let index = StubBlockIndex::new();

        // A record pointing at a block the index has never seen.
        let stray = CheckpointRecord::new(StubBlockIndex::unknown_block());
        db.put_checkpoint(stray).unwrap();

        let manager = CheckpointManager::new(db.clone());
        let err = manager
            .open_at_startup(&test_params(1), &index)
            .unwrap_err();
        assert!(matches!(err, StartupError::Corruption(_)));

        // No further mutation happened.
        assert_eq!(db.get_checkpoint().unwrap(), Some(stray));
        assert!(db.get_signer_binding().unwrap().is_none());
    }

    #[test]
    fn test_key_rotation_rebinds_and_resets_once() {
        let db = Arc::new(StubCheckpointDb::new());
        let mut index = StubBlockIndex::new();
        let anchor = index.add_block([0xaa; 32]);

        let old = test_params(1);
        let new = test_params(2);

        db.put_checkpoint(CheckpointRecord::new(anchor)).unwrap();
        db.put_signer_binding(SignerBinding::new(*old.signer_key()))
            .unwrap();

        let manager = CheckpointManager::new(db.clone());
        manager.open_at_startup(&new, &index).unwrap();

        // Rebound to the new key, stale checkpoint dropped.
        let binding = db.get_signer_binding().unwrap().unwrap();
        assert_eq!(binding.key(), new.signer_key());
        assert!(db.get_checkpoint().unwrap().is_none());

        // An unchanged second run heals back to genesis and does not reset
        // again.
        manager.open_at_startup(&new, &index).unwrap();
        let record = db.get_checkpoint().unwrap().unwrap();
        assert_eq!(record.block_id(), index.genesis_id());
    }

    #[test]
    fn test_matching_binding_leaves_store_untouched() {
        let db = Arc::new(StubCheckpointDb::new());
        let mut index = StubBlockIndex::new();
        let anchor = index.add_block([0xbb; 32]);
        let params = test_params(3);

        db.put_checkpoint(CheckpointRecord::new(anchor)).unwrap();
        db.put_signer_binding(SignerBinding::new(*params.signer_key()))
            .unwrap();

        let manager = CheckpointManager::new(db.clone());
        manager.open_at_startup(&params, &index).unwrap();

        let record = db.get_checkpoint().unwrap().unwrap();
        assert_eq!(record.block_id(), anchor);
    }

    #[test]
    fn test_absent_binding_with_existing_record_resets() {
        // A record without a binding cannot be attributed to any key, so it
        // must not stay trusted.
        let db = Arc::new(StubCheckpointDb::new());
        let mut index = StubBlockIndex::new();
        let anchor = index.add_block([0xcc; 32]);

        db.put_checkpoint(CheckpointRecord::new(anchor)).unwrap();

        let params = test_params(4);
        let manager = CheckpointManager::new(db.clone());
        manager.open_at_startup(&params, &index).unwrap();

        assert!(db.get_checkpoint().unwrap().is_none());
        let binding = db.get_signer_binding().unwrap().unwrap();
        assert_eq!(binding.key(), params.signer_key());
    }

    #[test]
    fn test_rebind_write_failure_is_fatal() {
        let db = Arc::new(FailingDb::new());
        let mut index = StubBlockIndex::new();
        let anchor = index.add_block([0xdd; 32]);

        let old = test_params(1);
        let new = test_params(2);
        db.put_checkpoint(CheckpointRecord::new(anchor)).unwrap();
        db.put_signer_binding(SignerBinding::new(*old.signer_key()))
            .unwrap();
        db.fail_put_binding(true);

        let manager = CheckpointManager::new(db);
        let err = manager.open_at_startup(&new, &index).unwrap_err();
        assert!(matches!(err, StartupError::Persistence(_)));
    }

    #[test]
    fn test_reset_failure_is_fatal() {
        let db = Arc::new(FailingDb::new());
        let mut index = StubBlockIndex::new();
        let anchor = index.add_block([0xee; 32]);

        let old = test_params(1);
        let new = test_params(2);
        db.put_checkpoint(CheckpointRecord::new(anchor)).unwrap();
        db.put_signer_binding(SignerBinding::new(*old.signer_key()))
            .unwrap();
        db.fail_reset(true);

        let manager = CheckpointManager::new(db);
        let err = manager.open_at_startup(&new, &index).unwrap_err();
        assert!(matches!(err, StartupError::Persistence(_)));
    }

    #[test]
    fn test_repeat_run_is_stable() {
        // Fresh store binds whatever key is expected; a later run with the
        // same key is a no-op.
        let db = Arc::new(StubCheckpointDb::new());
        let manager = CheckpointManager::new(db.clone());
        let index = StubBlockIndex::new();
        let params = test_params(9);

        manager.open_at_startup(&params, &index).unwrap();
        let first = db.get_checkpoint().unwrap();
        manager.open_at_startup(&params, &index).unwrap();
        assert_eq!(db.get_checkpoint().unwrap(), first);
    }
}
