//! Block identifier type.

use std::{fmt, str};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{buf::Buf32, hash::sha256d};

/// ID of a block, usually the hash of its header.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Default,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
pub struct BlockId(Buf32);

impl BlockId {
    /// Computes the [`BlockId`] from the serialized header buf.
    pub fn compute_from_header_buf(buf: &[u8]) -> BlockId {
        Self::from(sha256d(buf))
    }
}

impl From<Buf32> for BlockId {
    fn from(value: Buf32) -> Self {
        Self(value)
    }
}

impl From<BlockId> for Buf32 {
    fn from(value: BlockId) -> Self {
        value.0
    }
}

impl AsRef<[u8; 32]> for BlockId {
    fn as_ref(&self) -> &[u8; 32] {
        self.0.as_ref()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl str::FromStr for BlockId {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
