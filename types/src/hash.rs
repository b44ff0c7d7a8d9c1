//! Fixed-width hash types.
//!
//! `FixedHash<N>` is an immutable N-byte value whose canonical text form is
//! exactly `2 * N` lowercase hex digits. Text input may carry a `0x` prefix
//! and either letter case; it is normalised on construction.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use codechain_utils::{is_hex, strip_hex_prefix, to_hex};

use crate::codec;
use crate::TypesError;

/// An N-byte hash value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedHash<const N: usize>([u8; N]);

/// 128-bit hash.
pub type H128 = FixedHash<16>;
/// 160-bit hash. Used for account ids and public key hashes.
pub type H160 = FixedHash<20>;
/// 256-bit hash. Used for messages, private keys and digests.
pub type H256 = FixedHash<32>;
/// 512-bit hash. Used for uncompressed public keys (x ‖ y).
pub type H512 = FixedHash<64>;

impl<const N: usize> FixedHash<N> {
    /// Width in bytes.
    pub const LEN: usize = N;

    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub const fn zero() -> Self {
        Self([0u8; N])
    }

    /// Type name used in error messages, e.g. `H160`.
    pub fn kind() -> String {
        format!("H{}", N * 8)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypesError> {
        let array: [u8; N] = bytes.try_into().map_err(|_| TypesError::InvalidLength {
            kind: Self::kind(),
            expected: N,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    /// Parse `2 * N` hex digits with an optional `0x` prefix.
    pub fn from_hex(value: &str) -> Result<Self, TypesError> {
        let digits = strip_hex_prefix(value);
        let invalid = || TypesError::InvalidHex {
            kind: Self::kind(),
            expected: N * 2,
            value: value.to_string(),
        };
        if digits.len() != N * 2 || !is_hex(digits) {
            return Err(invalid());
        }
        let mut bytes = [0u8; N];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| invalid())?;
        Ok(Self(bytes))
    }

    /// True if `value` is well-formed hex text for this width.
    pub fn check(value: &str) -> bool {
        let digits = strip_hex_prefix(value);
        digits.len() == N * 2 && is_hex(digits)
    }

    /// Accept either an existing hash or its hex text.
    pub fn ensure(value: impl IntoHash<N>) -> Result<Self, TypesError> {
        value.into_hash()
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; N] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Bare lowercase hex, `2 * N` digits.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// `0x`-prefixed hex, the form handed to RLP and JSON encoders.
    pub fn to_encode_object(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    pub fn rlp_bytes(&self) -> Vec<u8> {
        codec::encode_item(&self.0)
    }

    /// Decode from RLP. The declared length must be exactly N bytes.
    pub fn from_rlp(encoded: &[u8]) -> Result<Self, TypesError> {
        let data = codec::decode_item(&Self::kind(), encoded)?;
        if data.len() != N {
            return Err(TypesError::InvalidRlp {
                kind: Self::kind(),
                reason: format!("expected {} bytes but found {}", N, data.len()),
            });
        }
        Self::from_slice(&data)
    }
}

impl<const N: usize> Default for FixedHash<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[u8; N]> for FixedHash<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedHash<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> FromStr for FixedHash<N> {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const N: usize> fmt::Display for FixedHash<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for FixedHash<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}({})", N * 8, self)
    }
}

impl<const N: usize> Serialize for FixedHash<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_encode_object())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedHash<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(de::Error::custom)
    }
}

/// Values accepted wherever a hash is expected: the hash itself or its text.
pub trait IntoHash<const N: usize> {
    fn into_hash(self) -> Result<FixedHash<N>, TypesError>;
}

impl<const N: usize> IntoHash<N> for FixedHash<N> {
    fn into_hash(self) -> Result<FixedHash<N>, TypesError> {
        Ok(self)
    }
}

impl<const N: usize> IntoHash<N> for &FixedHash<N> {
    fn into_hash(self) -> Result<FixedHash<N>, TypesError> {
        Ok(*self)
    }
}

impl<const N: usize> IntoHash<N> for &str {
    fn into_hash(self) -> Result<FixedHash<N>, TypesError> {
        FixedHash::from_hex(self)
    }
}

impl<const N: usize> IntoHash<N> for &String {
    fn into_hash(self) -> Result<FixedHash<N>, TypesError> {
        FixedHash::from_hex(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_width<const N: usize>() {
        let zero = "00".repeat(N);
        assert!(FixedHash::<N>::check(&zero));
        assert!(FixedHash::<N>::check(&format!("0x{}", zero)));
        assert!(FixedHash::<N>::check(&format!("{}F", &zero[1..])));
        assert!(FixedHash::<N>::check(&format!("{}f", &zero[1..])));
        assert!(!FixedHash::<N>::check(&format!("{}g", &zero[1..])));
        assert!(!FixedHash::<N>::check(&format!("{}0", zero)));
        assert!(!FixedHash::<N>::check(&zero[1..]));
        assert!(FixedHash::<N>::from_hex(&zero).unwrap().is_zero());
    }

    #[test]
    fn check_all_widths() {
        check_width::<16>();
        check_width::<20>();
        check_width::<32>();
        check_width::<64>();
    }

    #[test]
    fn text_is_normalised() {
        let h = H160::from_hex("0x7B5E0EE8644C6F585FC297364143280A45844502").unwrap();
        assert_eq!(h.to_string(), "7b5e0ee8644c6f585fc297364143280a45844502");
        assert_eq!(h, "7b5e0ee8644c6f585fc297364143280a45844502".parse().unwrap());
    }

    #[test]
    fn wrong_length_reports_kind() {
        let err = H160::from_hex("xxx").unwrap_err();
        assert_eq!(
            err,
            TypesError::InvalidHex {
                kind: "H160".into(),
                expected: 40,
                value: "xxx".into()
            }
        );
        assert!(err.to_string().contains("xxx"));
    }

    #[test]
    fn ensure_accepts_value_or_text() {
        let h = H128::from_hex(&"ab".repeat(16)).unwrap();
        assert_eq!(H128::ensure(h).unwrap(), h);
        assert_eq!(H128::ensure(&h).unwrap(), h);
        assert_eq!(H128::ensure("ab".repeat(16).as_str()).unwrap(), h);
        assert!(H128::ensure("abab").is_err());
    }

    #[test]
    fn rlp_round_trip() {
        let h = H160::new([0x11; 20]);
        let encoded = h.rlp_bytes();
        assert_eq!(encoded[0], 0x80 + 20);
        assert_eq!(encoded.len(), 21);
        assert_eq!(H160::from_rlp(&encoded).unwrap(), h);
    }

    #[test]
    fn rlp_of_wrong_width_is_rejected() {
        let encoded = H256::new([0x22; 32]).rlp_bytes();
        assert!(matches!(
            H160::from_rlp(&encoded),
            Err(TypesError::InvalidRlp { .. })
        ));
        let mut truncated = H160::new([0x11; 20]).rlp_bytes();
        truncated.pop();
        assert!(H160::from_rlp(&truncated).is_err());
    }

    #[test]
    fn serde_uses_prefixed_hex() {
        let h = H128::new([0xab; 16]);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(16)));
        let back: H128 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
        assert!(serde_json::from_str::<H128>("\"0x12\"").is_err());
    }

    #[test]
    fn encode_object_and_debug() {
        let h = H128::zero();
        assert_eq!(h.to_encode_object(), format!("0x{}", "00".repeat(16)));
        assert!(format!("{:?}", h).starts_with("H128("));
    }
}
