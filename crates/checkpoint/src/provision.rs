//! Opportunistic signing-key provisioning.
//!
//! Most nodes never hold the signer key; everything here is best-effort and
//! quiet about the common miss case.

use keel_db_types::{CheckpointDatabase, SignerBinding};
use keel_params::{ActivationParams, ActivationResolver};
use tracing::*;

use crate::{manager::ProvisionState, CheckpointManager, StartupError, Wallet};

impl<D: CheckpointDatabase> CheckpointManager<D> {
    /// Tries to find the private key for the configured signer key in the
    /// wallet and install it as the checkpoint signing key.
    ///
    /// Idempotent and best-effort: a no-op when the key is already
    /// installed, when params don't resolve for the current network, when
    /// no wallet is available, or when the wallet doesn't hold the key.
    /// Called from the startup path and again whenever a checkpoint is
    /// created or received, since the wallet may not have been loaded the
    /// first time around.
    pub fn try_init_master_key(&self, resolver: &ActivationResolver, wallet: Option<&dyn Wallet>) {
        let mut state = self.state.lock();
        self.init_master_key_locked(&mut state, resolver, wallet);
    }

    fn init_master_key_locked(
        &self,
        state: &mut ProvisionState,
        resolver: &ActivationResolver,
        wallet: Option<&dyn Wallet>,
    ) {
        if state.master_key_set {
            return;
        }

        let params = match resolver.resolve() {
            Ok(params) => params,
            Err(e) => {
                debug!(err = %e, "not provisioning checkpoint master key");
                return;
            }
        };

        let Some(wallet) = wallet else {
            return;
        };

        let key_id = params.signer_key().key_id();
        if let Some(privkey) = wallet.find_privkey(&key_id) {
            if wallet.install_signing_key(privkey) {
                state.master_key_set = true;
                info!(pubkey = %params.signer_key(), "sync checkpoint master key set");
            }
        }
    }

    /// First-time initialization of the store's signer binding plus a
    /// master-key attempt, behind a process-lifetime latch.
    ///
    /// Only the first call has effects; a failed binding write leaves the
    /// latch unset so a later call retries.  Runs under the same lock as
    /// the startup sequence, so it cannot race a key-rotation reset.
    pub fn try_init_sync_checkpoint(
        &self,
        params: &ActivationParams,
        resolver: &ActivationResolver,
        wallet: Option<&dyn Wallet>,
    ) -> Result<(), StartupError> {
        let mut state = self.state.lock();
        if state.init_done {
            return Ok(());
        }

        self.db
            .put_signer_binding(SignerBinding::new(*params.signer_key()))?;
        debug!("sync checkpoint init done");

        self.init_master_key_locked(&mut state, resolver, wallet);
        state.init_done = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use keel_db_types::stubs::StubCheckpointDb;
    use keel_params::{ActivationRegistry, NetworkIdentity};

    use super::*;
    use crate::testutil::{test_keypair, test_params, FailingDb, StubWallet};

    fn ccl_resolver() -> ActivationResolver {
        ActivationResolver::new(
            Arc::new(ActivationRegistry::well_known()),
            NetworkIdentity::derivative("CCL"),
            false,
        )
    }

    fn resolver_with_key(params: &ActivationParams) -> ActivationResolver {
        let mut derivatives = std::collections::BTreeMap::new();
        derivatives.insert("CCL".to_owned(), *params);
        ActivationResolver::new(
            Arc::new(ActivationRegistry::new(None, None, derivatives)),
            NetworkIdentity::derivative("CCL"),
            false,
        )
    }

    #[test]
    fn test_master_key_installed_when_wallet_holds_it() {
        let (secret, signer_key) = test_keypair(7);
        let params = test_params_with(signer_key);
        let resolver = resolver_with_key(&params);

        let wallet = StubWallet::new().with_key(signer_key.key_id(), secret);
        let manager = CheckpointManager::new(Arc::new(StubCheckpointDb::new()));

        manager.try_init_master_key(&resolver, Some(&wallet));

        assert!(manager.is_master_key_set());
        assert_eq!(wallet.installed(), Some(secret));
    }

    #[test]
    fn test_master_key_absent_is_silent() {
        let manager = CheckpointManager::new(Arc::new(StubCheckpointDb::new()));
        let wallet = StubWallet::new();

        manager.try_init_master_key(&ccl_resolver(), Some(&wallet));
        manager.try_init_master_key(&ccl_resolver(), Some(&wallet));

        assert!(!manager.is_master_key_set());
        assert!(wallet.installed().is_none());
        assert_eq!(wallet.lookups(), 2);
    }

    #[test]
    fn test_master_key_skips_lookup_once_set() {
        let (secret, signer_key) = test_keypair(8);
        let params = test_params_with(signer_key);
        let resolver = resolver_with_key(&params);

        let wallet = StubWallet::new().with_key(signer_key.key_id(), secret);
        let manager = CheckpointManager::new(Arc::new(StubCheckpointDb::new()));

        manager.try_init_master_key(&resolver, Some(&wallet));
        manager.try_init_master_key(&resolver, Some(&wallet));

        assert_eq!(wallet.lookups(), 1);
    }

    #[test]
    fn test_master_key_noop_without_wallet() {
        let manager = CheckpointManager::new(Arc::new(StubCheckpointDb::new()));
        manager.try_init_master_key(&ccl_resolver(), None);
        assert!(!manager.is_master_key_set());
    }

    #[test]
    fn test_master_key_noop_when_unresolved() {
        let resolver = ActivationResolver::new(
            Arc::new(ActivationRegistry::well_known()),
            NetworkIdentity::Unset,
            false,
        );
        let wallet = StubWallet::new();
        let manager = CheckpointManager::new(Arc::new(StubCheckpointDb::new()));

        manager.try_init_master_key(&resolver, Some(&wallet));

        assert_eq!(wallet.lookups(), 0);
    }

    #[test]
    fn test_init_sync_checkpoint_is_one_shot() {
        let db = Arc::new(StubCheckpointDb::new());
        let manager = CheckpointManager::new(db.clone());
        let params = test_params(5);
        let resolver = resolver_with_key(&params);

        manager
            .try_init_sync_checkpoint(&params, &resolver, None)
            .unwrap();
        let binding = db.get_signer_binding().unwrap().unwrap();
        assert_eq!(binding.key(), params.signer_key());

        // Overwrite the binding out-of-band; the latched second call must
        // not touch the store again.
        let other = test_params(6);
        db.put_signer_binding(SignerBinding::new(*other.signer_key()))
            .unwrap();
        manager
            .try_init_sync_checkpoint(&params, &resolver, None)
            .unwrap();
        let binding = db.get_signer_binding().unwrap().unwrap();
        assert_eq!(binding.key(), other.signer_key());
    }

    #[test]
    fn test_init_sync_checkpoint_retries_after_write_failure() {
        let db = Arc::new(FailingDb::new());
        db.fail_put_binding(true);
        let manager = CheckpointManager::new(db.clone());
        let params = test_params(5);
        let resolver = resolver_with_key(&params);

        assert!(manager
            .try_init_sync_checkpoint(&params, &resolver, None)
            .is_err());

        // The latch stayed unset, so a later call goes through.
        db.fail_put_binding(false);
        manager
            .try_init_sync_checkpoint(&params, &resolver, None)
            .unwrap();
        let binding = db.get_signer_binding().unwrap().unwrap();
        assert_eq!(binding.key(), params.signer_key());
    }

    fn test_params_with(key: keel_identifiers::SignerKey) -> ActivationParams {
        ActivationParams::new(keel_params::ActivationThreshold::Timestamp(1_700_000_000), key)
    }
}
