//! Network identity of a running process.

use std::fmt;

/// Which network of the family the process is configured for.
///
/// Fixed once, early in startup, when configuration is parsed.  Params
/// resolution against [`NetworkIdentity::Unset`] reports
/// [`crate::ParamsError::NetworkNotInitialized`] so callers can tell "too
/// early" apart from "not configured".
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum NetworkIdentity {
    /// No network has been established yet.
    #[default]
    Unset,

    /// The primary production network.
    Primary,

    /// A derivative network identified by its unique, case-sensitive symbol.
    Derivative(String),
}

impl NetworkIdentity {
    /// Identity of a derivative network by symbol.
    pub fn derivative(symbol: impl Into<String>) -> Self {
        Self::Derivative(symbol.into())
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Primary)
    }

    /// Whether an identity has been established.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl fmt::Display for NetworkIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("(unset)"),
            Self::Primary => f.write_str("(primary)"),
            Self::Derivative(symbol) => f.write_str(symbol),
        }
    }
}
