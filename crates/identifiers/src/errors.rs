//! Errors during parsing/handling of identifiers.

use thiserror::Error;

/// Parsing errors for identifier and key types.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The input was not valid hex.
    #[error("invalid hex string")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded length does not match the buffer length.
    #[error("expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// The supplied pubkey is invalid.
    #[error("supplied pubkey is invalid")]
    InvalidPubkey(#[from] secp256k1::Error),

    /// Compressed pubkeys must start with an 0x02 or 0x03 parity byte.
    #[error("invalid compressed pubkey prefix {0:#04x}")]
    InvalidKeyPrefix(u8),
}
