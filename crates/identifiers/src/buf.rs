//! Fixed-size byte buffers.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};

/// A 20-byte buffer, the size of a hash160 digest.
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
)]
pub struct Buf20([u8; 20]);

/// A 32-byte buffer, the size of a sha256d digest.
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
)]
pub struct Buf32([u8; 32]);

/// A 33-byte buffer, the size of a SEC1 compressed pubkey.
///
/// No `Default` here, the all-zeroes buffer is never a meaningful key.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary, BorshSerialize, BorshDeserialize,
)]
pub struct Buf33([u8; 33]);

impl_buf_common!(Buf20, 20);
impl_buf_common!(Buf32, 32);
impl_buf_common!(Buf33, 33);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let buf = Buf32::new([0xab; 32]);
        let s = buf.to_string();
        assert_eq!(s.len(), 64);
        assert_eq!(s.parse::<Buf32>().unwrap(), buf);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "abcd".parse::<Buf20>().unwrap_err();
        assert!(matches!(
            err,
            crate::ParseError::InvalidLength {
                expected: 20,
                got: 2
            }
        ));
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        assert!("zz".repeat(32).parse::<Buf32>().is_err());
    }

    #[test]
    fn test_borsh_roundtrip() {
        let buf = Buf33::new([0x42; 33]);
        let bytes = borsh::to_vec(&buf).unwrap();
        assert_eq!(bytes.len(), 33);
        let decoded: Buf33 = borsh::from_slice(&bytes).unwrap();
        assert_eq!(decoded, buf);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let buf = Buf20::new([0x01; 20]);
        let json = serde_json::to_string(&buf).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(20)));
        let back: Buf20 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, buf);
    }

    #[test]
    fn test_zero() {
        assert!(Buf32::zero().is_zero());
        assert!(!Buf32::new([1; 32]).is_zero());
    }
}
