//! Test doubles for the collaborator traits and the store.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use keel_db_types::{
    stubs::StubCheckpointDb, CheckpointDatabase, CheckpointRecord, DbError, DbResult, SignerBinding,
};
use keel_identifiers::{BlockId, Buf32, KeyId, SignerKey};
use keel_params::{ActivationParams, ActivationThreshold};
use parking_lot::Mutex;
use secp256k1::{PublicKey, SecretKey, SECP256K1};

use crate::{BlockIndex, Wallet};

/// Deterministic keypair for tests.
pub(crate) fn test_keypair(byte: u8) -> (SecretKey, SignerKey) {
    let secret = SecretKey::from_slice(&[byte.max(1); 32]).expect("test: secret key");
    let public = PublicKey::from_secret_key(SECP256K1, &secret);
    let signer = SignerKey::from_bytes(public.serialize()).expect("test: signer key");
    (secret, signer)
}

/// Params carrying a deterministic signer key.
pub(crate) fn test_params(byte: u8) -> ActivationParams {
    let (_, signer) = test_keypair(byte);
    ActivationParams::new(ActivationThreshold::Timestamp(1_700_000_000), signer)
}

/// Block index stub with a fixed genesis plus any added blocks.
#[derive(Debug)]
pub(crate) struct StubBlockIndex {
    genesis: BlockId,
    known: Vec<BlockId>,
}

impl StubBlockIndex {
    pub(crate) fn new() -> Self {
        let genesis = BlockId::from(Buf32::new([0x01; 32]));
        Self {
            genesis,
            known: vec![genesis],
        }
    }

    /// A block ID no index instance ever contains.
    pub(crate) fn unknown_block() -> BlockId {
        BlockId::from(Buf32::new([0xfe; 32]))
    }

    pub(crate) fn add_block(&mut self, raw: [u8; 32]) -> BlockId {
        let id = BlockId::from(Buf32::new(raw));
        self.known.push(id);
        id
    }
}

impl BlockIndex for StubBlockIndex {
    fn contains(&self, id: &BlockId) -> bool {
        self.known.contains(id)
    }

    fn genesis_id(&self) -> BlockId {
        self.genesis
    }
}

/// Wallet stub tracking lookups and the installed key.
#[derive(Debug, Default)]
pub(crate) struct StubWallet {
    keys: HashMap<KeyId, SecretKey>,
    installed: Mutex<Option<SecretKey>>,
    lookups: AtomicUsize,
}

impl StubWallet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_key(mut self, key_id: KeyId, secret: SecretKey) -> Self {
        self.keys.insert(key_id, secret);
        self
    }

    pub(crate) fn installed(&self) -> Option<SecretKey> {
        *self.installed.lock()
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl Wallet for StubWallet {
    fn find_privkey(&self, key_id: &KeyId) -> Option<SecretKey> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.keys.get(key_id).copied()
    }

    fn install_signing_key(&self, key: SecretKey) -> bool {
        *self.installed.lock() = Some(key);
        true
    }
}

/// Store wrapper with injectable write failures.
#[derive(Debug, Default)]
pub(crate) struct FailingDb {
    inner: StubCheckpointDb,
    fail_put_checkpoint: AtomicBool,
    fail_put_binding: AtomicBool,
    fail_reset: AtomicBool,
}

impl FailingDb {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_put_checkpoint(&self, on: bool) {
        self.fail_put_checkpoint.store(on, Ordering::Relaxed);
    }

    pub(crate) fn fail_put_binding(&self, on: bool) {
        self.fail_put_binding.store(on, Ordering::Relaxed);
    }

    pub(crate) fn fail_reset(&self, on: bool) {
        self.fail_reset.store(on, Ordering::Relaxed);
    }

    fn injected() -> DbError {
        DbError::IoError("injected failure".to_owned())
    }
}

impl CheckpointDatabase for FailingDb {
    fn get_checkpoint(&self) -> DbResult<Option<CheckpointRecord>> {
        self.inner.get_checkpoint()
    }

    fn put_checkpoint(&self, record: CheckpointRecord) -> DbResult<()> {
        if self.fail_put_checkpoint.load(Ordering::Relaxed) {
            return Err(Self::injected());
        }
        self.inner.put_checkpoint(record)
    }

    fn reset_checkpoint(&self) -> DbResult<bool> {
        if self.fail_reset.load(Ordering::Relaxed) {
            return Err(Self::injected());
        }
        self.inner.reset_checkpoint()
    }

    fn get_signer_binding(&self) -> DbResult<Option<SignerBinding>> {
        self.inner.get_signer_binding()
    }

    fn put_signer_binding(&self, binding: SignerBinding) -> DbResult<()> {
        if self.fail_put_binding.load(Ordering::Relaxed) {
            return Err(Self::injected());
        }
        self.inner.put_signer_binding(binding)
    }
}
