//! Signer key types for the checkpoint trust model.
//!
//! A [`SignerKey`] is the public half of the key authorized to produce
//! checkpoint updates for a network.  Its [`KeyId`] is the hash160 identity
//! wallets index their key material by.

use std::{fmt, str};

use borsh::{BorshDeserialize, BorshSerialize};
use secp256k1::PublicKey;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    buf::{Buf20, Buf33},
    errors::ParseError,
    hash::hash160,
};

/// Identity of a key, the hash160 of its serialized pubkey.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, BorshSerialize, BorshDeserialize,
)]
pub struct KeyId(Buf20);

impl From<Buf20> for KeyId {
    fn from(value: Buf20) -> Self {
        Self(value)
    }
}

impl From<KeyId> for Buf20 {
    fn from(value: KeyId) -> Self {
        value.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// A compressed secp256k1 public key in its 33-byte SEC1 encoding.
///
/// Construction checks the parity-byte prefix only; use
/// [`SignerKey::to_public_key`] for the full curve check.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, BorshSerialize, BorshDeserialize)]
pub struct SignerKey(Buf33);

impl SignerKey {
    /// Wraps a raw 33-byte encoding, checking the SEC1 parity prefix.
    pub fn from_bytes(raw: [u8; 33]) -> Result<Self, ParseError> {
        match raw[0] {
            2 | 3 => Ok(Self(Buf33::new(raw))),
            b => Err(ParseError::InvalidKeyPrefix(b)),
        }
    }

    pub fn as_bytes(&self) -> &[u8; 33] {
        self.0.as_ref()
    }

    /// The hash160 identity wallets use to look this key up.
    pub fn key_id(&self) -> KeyId {
        KeyId::from(hash160(self.0.as_slice()))
    }

    /// Parses the encoding into a curve point, validating it fully.
    pub fn to_public_key(&self) -> Result<PublicKey, ParseError> {
        Ok(PublicKey::from_slice(self.0.as_slice())?)
    }
}

impl fmt::Display for SignerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for SignerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignerKey({})", self.0)
    }
}

impl str::FromStr for SignerKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let buf: Buf33 = s.parse()?;
        Self::from_bytes(buf.into_inner())
    }
}

impl Serialize for SignerKey {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SignerKey {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(d)?;
        s.parse().map_err(de::Error::custom)
    }
}
