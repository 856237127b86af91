//! Activation threshold gating.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw threshold values below this are block heights, values at or above it
/// are unix timestamps.  Same convention as transaction locktimes and the
/// season gating used elsewhere in the family.
pub const LOCKTIME_THRESHOLD: u64 = 500_000_000;

/// The gate past which checkpoint enforcement begins for a network.
///
/// Wire and config data carry this as a bare integer whose meaning depends
/// on its magnitude; the tag makes the interpretation explicit in code.
/// Apply the magnitude convention only at the boundary, via
/// [`ActivationThreshold::from_raw`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ActivationThreshold {
    /// Active once the chain grows past this block height.
    Height(u64),
    /// Active once block time passes this unix timestamp.
    Timestamp(u64),
}

impl ActivationThreshold {
    /// Applies the magnitude convention to a raw config/wire value.
    pub fn from_raw(raw: u64) -> Self {
        if raw < LOCKTIME_THRESHOLD {
            Self::Height(raw)
        } else {
            Self::Timestamp(raw)
        }
    }

    /// The raw value as carried in config/wire data.
    pub fn raw(&self) -> u64 {
        match self {
            Self::Height(v) | Self::Timestamp(v) => *v,
        }
    }

    /// Whether the gate has been passed at the given chain position.
    ///
    /// Strictly greater-than, same comparison as the season gating.
    pub fn is_reached(&self, height: u64, timestamp: u64) -> bool {
        match self {
            Self::Height(h) => height > *h,
            Self::Timestamp(t) => timestamp > *t,
        }
    }
}

impl fmt::Display for ActivationThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Height(h) => write!(f, "height {h}"),
            Self::Timestamp(t) => write!(f, "timestamp {t}"),
        }
    }
}

impl Serialize for ActivationThreshold {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(self.raw())
    }
}

impl<'de> Deserialize<'de> for ActivationThreshold {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = u64::deserialize(d)?;
        Ok(Self::from_raw(raw))
    }
}
