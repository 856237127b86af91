//! Hash functions used for identifier derivation.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::{Buf20, Buf32};

/// Computes the double SHA-256 of the input, the block hash function of the
/// chain family.
pub fn sha256d(buf: &[u8]) -> Buf32 {
    let once = Sha256::digest(buf);
    let twice = Sha256::digest(once);
    Buf32::new(twice.into())
}

/// Computes RIPEMD-160 over SHA-256 of the input, used to derive key
/// identities from serialized pubkeys.
pub fn hash160(buf: &[u8]) -> Buf20 {
    let sha = Sha256::digest(buf);
    let rip = Ripemd160::digest(sha);
    Buf20::new(rip.into())
}
