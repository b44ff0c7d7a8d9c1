//! Bounded unsigned integers: `U64`, `U128` and `U256`.
//!
//! Every width is backed by a 256-bit word and carries its own bound.
//! Construction from a literal saturates at `max_value()`, while the
//! arithmetic methods (`plus`, `minus`, `times`, `idiv`, `modulo`) fail with
//! a range error instead of wrapping or clamping.

use primitive_types::{U256 as Word, U512};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use codechain_utils::{group_digits, is_hex, strip_hex_prefix};

use crate::codec;
use crate::TypesError;

/// A non-negative integer representable in `BITS` bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint<const BITS: u32>(Word);

pub type U64 = Uint<64>;
pub type U128 = Uint<128>;
pub type U256 = Uint<256>;

impl<const BITS: u32> Uint<BITS> {
    /// Width in bytes. Only whole-byte widths up to 256 bits exist.
    pub const BYTES: usize = {
        assert!(BITS % 8 == 0 && BITS > 0 && BITS <= 256, "unsupported Uint width");
        (BITS / 8) as usize
    };

    pub fn zero() -> Self {
        Self(Word::zero())
    }

    pub fn max_value() -> Self {
        Self(Self::max_word())
    }

    fn max_word() -> Word {
        let mut bytes = [0u8; 32];
        for b in bytes[32 - Self::BYTES..].iter_mut() {
            *b = 0xff;
        }
        Word::from_big_endian(&bytes)
    }

    fn kind() -> String {
        format!("U{}", BITS)
    }

    pub fn new(value: u64) -> Self {
        Self::saturating_from_word(Word::from(value))
    }

    /// Clamp `value` to this width.
    pub fn saturating_from_word(value: Word) -> Self {
        Self(value.min(Self::max_word()))
    }

    pub fn saturating_from_u128(value: u128) -> Self {
        Self::saturating_from_word(Word::from(value))
    }

    /// Parse a decimal literal, saturating at `max_value()`.
    pub fn from_dec_str(value: &str) -> Result<Self, TypesError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Self::invalid(value));
        }
        let digits = value.trim_start_matches('0');
        // 154 decimal digits always fit in 512 bits; anything longer is
        // beyond every width and saturates.
        if digits.len() > 154 {
            return Ok(Self::max_value());
        }
        let wide = U512::from_dec_str(value).map_err(|_| Self::invalid(value))?;
        Ok(Self::saturating_from_wide(wide))
    }

    /// Parse hex digits with an optional `0x` prefix, saturating at `max_value()`.
    pub fn from_hex(value: &str) -> Result<Self, TypesError> {
        let digits = strip_hex_prefix(value);
        if !is_hex(digits) {
            return Err(Self::invalid(value));
        }
        let significant = digits.trim_start_matches('0');
        if significant.len() > 64 {
            return Ok(Self::max_value());
        }
        let padded = format!("{:0>64}", significant);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes).map_err(|_| Self::invalid(value))?;
        Ok(Self::saturating_from_word(Word::from_big_endian(&bytes)))
    }

    /// True if `value` parses as a decimal or `0x` hex literal.
    pub fn check(value: &str) -> bool {
        value.parse::<Self>().is_ok()
    }

    /// Accept an existing value, a `u64`, or literal text.
    pub fn ensure(value: impl IntoUint<BITS>) -> Result<Self, TypesError> {
        value.into_uint()
    }

    fn saturating_from_wide(value: U512) -> Self {
        if value > U512::from(Self::max_word()) {
            return Self::max_value();
        }
        let mut bytes = [0u8; 64];
        value.to_big_endian(&mut bytes);
        Self(Word::from_big_endian(&bytes[32..]))
    }

    fn invalid(value: &str) -> TypesError {
        TypesError::InvalidInteger {
            kind: Self::kind(),
            value: value.to_string(),
        }
    }

    pub fn as_word(&self) -> Word {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn plus(self, rhs: Self) -> Result<Self, TypesError> {
        self.0
            .checked_add(rhs.0)
            .filter(|sum| *sum <= Self::max_word())
            .map(Self)
            .ok_or(TypesError::Overflow { bits: BITS })
    }

    pub fn minus(self, rhs: Self) -> Result<Self, TypesError> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(TypesError::Underflow { bits: BITS })
    }

    pub fn times(self, rhs: Self) -> Result<Self, TypesError> {
        self.0
            .checked_mul(rhs.0)
            .filter(|product| *product <= Self::max_word())
            .map(Self)
            .ok_or(TypesError::Overflow { bits: BITS })
    }

    /// Integer division, rounding toward zero.
    pub fn idiv(self, rhs: Self) -> Result<Self, TypesError> {
        if rhs.is_zero() {
            return Err(TypesError::DivisionByZero);
        }
        Ok(Self(self.0 / rhs.0))
    }

    pub fn modulo(self, rhs: Self) -> Result<Self, TypesError> {
        if rhs.is_zero() {
            return Err(TypesError::DivisionByZero);
        }
        Ok(Self(self.0 % rhs.0))
    }

    /// Text in base 10 or base 16 (lowercase, no prefix). Other radixes
    /// are not supported and return `None`.
    pub fn to_string_radix(&self, radix: u32) -> Option<String> {
        match radix {
            10 => Some(self.0.to_string()),
            16 => Some(format!("{:x}", self.0)),
            _ => None,
        }
    }

    /// Decimal text grouped in thousands, e.g. `1,000,000`.
    pub fn to_locale_string(&self) -> String {
        group_digits(&self.0.to_string())
    }

    /// `0` for zero, otherwise `0x` followed by an even number of hex digits.
    pub fn to_encode_object(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let hex = format!("{:x}", self.0);
        if hex.len() % 2 == 0 {
            format!("0x{}", hex)
        } else {
            format!("0x0{}", hex)
        }
    }

    /// Big-endian bytes, zero-padded to 32 regardless of width.
    pub fn to_big_endian(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        self.0.to_big_endian(&mut bytes);
        bytes
    }

    /// Read big-endian bytes; the value must fit in this width.
    pub fn from_big_endian(bytes: &[u8]) -> Result<Self, TypesError> {
        let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        let significant = &bytes[first..];
        if significant.len() > Self::BYTES {
            return Err(TypesError::InvalidLength {
                kind: Self::kind(),
                expected: Self::BYTES,
                actual: significant.len(),
            });
        }
        Ok(Self(Word::from_big_endian(significant)))
    }

    /// Minimal big-endian bytes (empty for zero).
    pub fn to_be_bytes_trimmed(&self) -> Vec<u8> {
        let bytes = self.to_big_endian();
        let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        bytes[first..].to_vec()
    }

    pub fn rlp_bytes(&self) -> Vec<u8> {
        codec::encode_item(&self.to_be_bytes_trimmed())
    }

    pub fn from_rlp(encoded: &[u8]) -> Result<Self, TypesError> {
        let data = codec::decode_item(&Self::kind(), encoded)?;
        if data.len() > Self::BYTES {
            return Err(TypesError::InvalidRlp {
                kind: Self::kind(),
                reason: format!(
                    "buffer must be at most {} bytes but found {}",
                    Self::BYTES,
                    data.len()
                ),
            });
        }
        Ok(Self(Word::from_big_endian(&data)))
    }
}

impl<const BITS: u32> From<u64> for Uint<BITS> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<U64> for U128 {
    fn from(value: U64) -> Self {
        Self(value.0)
    }
}

impl From<U64> for U256 {
    fn from(value: U64) -> Self {
        Self(value.0)
    }
}

impl From<U128> for U256 {
    fn from(value: U128) -> Self {
        Self(value.0)
    }
}

impl From<Word> for U256 {
    fn from(value: Word) -> Self {
        Self(value)
    }
}

impl<const BITS: u32> FromStr for Uint<BITS> {
    type Err = TypesError;

    /// `0x`-prefixed text is hex, anything else decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") {
            Self::from_hex(s)
        } else {
            Self::from_dec_str(s)
        }
    }
}

impl<const BITS: u32> fmt::Display for Uint<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const BITS: u32> fmt::Debug for Uint<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U{}({})", BITS, self.0)
    }
}

impl<const BITS: u32> fmt::LowerHex for Uint<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<const BITS: u32> Serialize for Uint<BITS> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{:x}", self.0))
    }
}

impl<'de, const BITS: u32> Deserialize<'de> for Uint<BITS> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UintVisitor<const B: u32>;

        impl<'de, const B: u32> de::Visitor<'de> for UintVisitor<B> {
            type Value = Uint<B>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a non-negative integer or a decimal/0x-hex string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Uint::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(Uint::new)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(UintVisitor::<BITS>)
    }
}

/// Values accepted wherever a bounded integer is expected.
pub trait IntoUint<const BITS: u32> {
    fn into_uint(self) -> Result<Uint<BITS>, TypesError>;
}

impl<const BITS: u32> IntoUint<BITS> for Uint<BITS> {
    fn into_uint(self) -> Result<Uint<BITS>, TypesError> {
        Ok(self)
    }
}

impl<const BITS: u32> IntoUint<BITS> for u64 {
    fn into_uint(self) -> Result<Uint<BITS>, TypesError> {
        Ok(Uint::new(self))
    }
}

impl<const BITS: u32> IntoUint<BITS> for &str {
    fn into_uint(self) -> Result<Uint<BITS>, TypesError> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_literals() {
        assert!(U256::check("0"));
        assert!(U256::check("0x0"));
        assert!(U256::check("1000000000000"));
        assert!(!U256::check("-1"));
        assert!(!U256::check("0.5"));
        assert!(!U256::check(""));
        assert!(!U256::check("0x"));
    }

    #[test]
    fn ensure_accepts_all_forms() {
        let ten = U256::new(10);
        assert_eq!(U256::ensure(10u64).unwrap(), ten);
        assert_eq!(U256::ensure("10").unwrap(), ten);
        assert_eq!(U256::ensure("0xA").unwrap(), ten);
        assert_eq!(U256::ensure(ten).unwrap(), ten);
        assert!(U256::ensure("ten").is_err());
    }

    #[test]
    fn over_wide_literal_saturates() {
        assert_eq!(U64::from_dec_str("18446744073709551616").unwrap(), U64::max_value());
        assert_eq!(U64::from_hex("0x10000000000000000").unwrap(), U64::max_value());
        assert_eq!(U128::from_hex(&"f".repeat(40)).unwrap(), U128::max_value());
        assert_eq!(U256::from_hex(&"f".repeat(80)).unwrap(), U256::max_value());
        assert_eq!(U256::from_dec_str(&"9".repeat(200)).unwrap(), U256::max_value());
        assert_eq!(U64::saturating_from_u128(u128::MAX), U64::max_value());
    }

    #[test]
    fn max_values() {
        assert_eq!(U64::max_value().to_string(), u64::MAX.to_string());
        assert_eq!(U128::max_value().to_string(), u128::MAX.to_string());
        assert_eq!(U256::max_value().to_string_radix(16).unwrap(), "f".repeat(64));
    }

    #[test]
    fn widths() {
        assert_eq!(U64::BYTES, 8);
        assert_eq!(U128::BYTES, 16);
        assert_eq!(U256::BYTES, 32);
    }

    #[test]
    fn longest_in_range_decimal_is_parsed() {
        let digits = "1".repeat(154);
        assert_eq!(U256::from_dec_str(&digits).unwrap(), U256::max_value());
        assert_eq!(U64::from_dec_str(&"0".repeat(200)).unwrap(), U64::zero());
    }

    #[test]
    fn plus() {
        assert_eq!(U256::new(10).plus(U256::new(5)).unwrap(), U256::new(15));
        assert_eq!(
            U256::max_value().plus(U256::new(1)),
            Err(TypesError::Overflow { bits: 256 })
        );
        assert_eq!(
            U64::max_value().plus(U64::new(1)),
            Err(TypesError::Overflow { bits: 64 })
        );
        assert!(U128::max_value()
            .plus(U128::new(1))
            .unwrap_err()
            .to_string()
            .contains("overflow"));
    }

    #[test]
    fn minus() {
        assert_eq!(U256::new(10).minus(U256::new(5)).unwrap(), U256::new(5));
        let err = U256::new(5).minus(U256::new(10)).unwrap_err();
        assert_eq!(err, TypesError::Underflow { bits: 256 });
        assert!(err.to_string().contains("underflow"));
        assert!(U64::zero().minus(U64::new(1)).is_err());
    }

    #[test]
    fn times() {
        assert_eq!(U256::new(10).times(U256::new(5)).unwrap(), U256::new(50));
        assert_eq!(U256::max_value().times(U256::zero()).unwrap(), U256::zero());
        assert_eq!(U256::max_value().times(U256::new(1)).unwrap(), U256::max_value());
        assert!(U256::max_value().times(U256::new(2)).unwrap_err().is_range_violation());
        assert!(U128::max_value().times(U128::new(2)).is_err());
    }

    #[test]
    fn idiv_and_modulo() {
        assert_eq!(U256::new(10).idiv(U256::new(5)).unwrap(), U256::new(2));
        assert_eq!(U256::new(14).idiv(U256::new(5)).unwrap(), U256::new(2));
        assert_eq!(U256::new(10).modulo(U256::new(5)).unwrap(), U256::zero());
        assert_eq!(U256::new(14).modulo(U256::new(5)).unwrap(), U256::new(4));
        let err = U256::new(10).idiv(U256::zero()).unwrap_err();
        assert_eq!(err.to_string(), "divided by 0");
        assert_eq!(U64::new(10).modulo(U64::zero()), Err(TypesError::DivisionByZero));
    }

    #[test]
    fn comparison() {
        let ten = U256::new(10);
        assert!(U256::new(11) > ten);
        assert!(U256::new(10) >= ten);
        assert!(U256::new(9) < ten);
        assert!(U256::new(10) <= ten);
        assert_ne!(U256::new(9), ten);
    }

    #[test]
    fn rlp_bytes() {
        assert_eq!(U256::new(0).rlp_bytes(), vec![0x80]);
        assert_eq!(U256::new(10).rlp_bytes(), vec![0x0a]);
        assert_eq!(U256::new(255).rlp_bytes(), vec![0x81, 0xff]);
        assert_eq!(U256::new(1000).rlp_bytes(), vec![0x82, 0x03, 0xe8]);
        assert_eq!(U256::new(100000).rlp_bytes(), vec![0x83, 0x01, 0x86, 0xa0]);
        assert_eq!(U256::new(10000000).rlp_bytes(), vec![0x83, 0x98, 0x96, 0x80]);
        assert_eq!(
            U256::from_dec_str("1000000000").unwrap().rlp_bytes(),
            vec![0x84, 0x3b, 0x9a, 0xca, 0x00]
        );
        assert_eq!(
            U256::from_dec_str("1000000000000").unwrap().rlp_bytes(),
            vec![0x85, 0xe8, 0xd4, 0xa5, 0x10, 0x00]
        );
    }

    #[test]
    fn from_rlp() {
        for value in [0u64, 10, 255, 1000, 1_000_000_000_000] {
            let a = U256::new(value);
            assert_eq!(U256::from_rlp(&a.rlp_bytes()).unwrap(), a);
        }
        assert!(U256::from_rlp(&[0x82, 0x03]).is_err());
        let wide = U128::max_value().rlp_bytes();
        assert!(U64::from_rlp(&wide).is_err());
        assert_eq!(U128::from_rlp(&wide).unwrap(), U128::max_value());
    }

    #[test]
    fn encode_object() {
        assert_eq!(U256::new(0).to_encode_object(), "0");
        assert_eq!(U256::new(0xf).to_encode_object(), "0x0f");
        assert_eq!(U256::new(0xff).to_encode_object(), "0xff");
        assert_eq!(U256::new(0xfff).to_encode_object(), "0x0fff");
    }

    #[test]
    fn text_forms() {
        assert_eq!(U256::new(0).to_string(), "0");
        assert_eq!(U256::new(0xff).to_string(), "255");
        assert_eq!(U256::new(0xff).to_string_radix(16).unwrap(), "ff");
        assert_eq!(U256::new(0xff).to_string_radix(10).unwrap(), "255");
        assert_eq!(U256::new(0xff).to_string_radix(2), None);
        assert_eq!(U256::new(0xff).to_string_radix(8), None);
        assert_eq!(U256::new(1234567).to_locale_string(), "1,234,567");
        assert_eq!(format!("{:?}", U64::new(7)), "U64(7)");
    }

    #[test]
    fn big_endian_bytes() {
        let a = U256::new(0x0102);
        let bytes = a.to_big_endian();
        assert_eq!(&bytes[30..], &[0x01, 0x02]);
        assert_eq!(U256::from_big_endian(&bytes).unwrap(), a);
        assert_eq!(U64::from_big_endian(&bytes).unwrap(), U64::new(0x0102));
        assert!(U64::from_big_endian(&[1u8; 9]).is_err());
        assert_eq!(U64::from_big_endian(&[]).unwrap(), U64::zero());
    }

    #[test]
    fn widening_is_lossless() {
        let a = U64::max_value();
        let b: U128 = a.into();
        let c: U256 = b.into();
        assert_eq!(c.to_string(), u64::MAX.to_string());
    }

    #[test]
    fn serde_forms() {
        let json = serde_json::to_string(&U256::new(255)).unwrap();
        assert_eq!(json, "\"0xff\"");
        assert_eq!(serde_json::from_str::<U256>("\"0xff\"").unwrap(), U256::new(255));
        assert_eq!(serde_json::from_str::<U256>("\"255\"").unwrap(), U256::new(255));
        assert_eq!(serde_json::from_str::<U64>("255").unwrap(), U64::new(255));
        assert!(serde_json::from_str::<U64>("-1").is_err());
    }
}
