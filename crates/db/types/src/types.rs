//! Persisted record types for the checkpoint store.

use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use keel_identifiers::{BlockId, SignerKey};

/// The currently trusted non-reorgable anchor.
///
/// Whenever this is read back, its block must exist in the local block
/// index; a miss means the store is corrupted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct CheckpointRecord {
    block_id: BlockId,
}

impl CheckpointRecord {
    pub fn new(block_id: BlockId) -> Self {
        Self { block_id }
    }

    pub fn block_id(&self) -> BlockId {
        self.block_id
    }
}

impl fmt::Display for CheckpointRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.block_id, f)
    }
}

/// The signer public key the node currently trusts for checkpoint updates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct SignerBinding {
    key: SignerKey,
}

impl SignerBinding {
    pub fn new(key: SignerKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &SignerKey {
        &self.key
    }
}
