//! Collaborator interfaces onto the block index and the wallet.

use keel_identifiers::{BlockId, KeyId};
use secp256k1::SecretKey;

/// Read-only view of the local block index.
pub trait BlockIndex: Send + Sync {
    /// Whether a block with this ID is present in the local index.
    fn contains(&self, id: &BlockId) -> bool;

    /// ID of the network's genesis block.
    fn genesis_id(&self) -> BlockId;
}

/// Key-lookup interface onto the wallet subsystem.
///
/// Implementations do their own locking.  Callers already hold the
/// checkpoint lock when they get here; taking the checkpoint lock from
/// inside an implementation would invert the lock order.
pub trait Wallet: Send + Sync {
    /// Looks up the private key matching a key identity, if this wallet
    /// holds it.
    fn find_privkey(&self, key_id: &KeyId) -> Option<SecretKey>;

    /// Installs the checkpoint signing key, returning whether it was
    /// accepted.
    fn install_signing_key(&self, key: SecretKey) -> bool;
}
