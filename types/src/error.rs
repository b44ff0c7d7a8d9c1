//! Error type for value construction, decoding and arithmetic.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("expected {expected} hex digits for {kind} but found \"{value}\"")]
    InvalidHex {
        kind: String,
        expected: usize,
        value: String,
    },

    #[error("expected {expected} bytes for {kind} but found {actual}")]
    InvalidLength {
        kind: String,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} must be a non-negative integer but found \"{value}\"")]
    InvalidInteger { kind: String, value: String },

    #[error("invalid RLP for {kind}: {reason}")]
    InvalidRlp { kind: String, reason: String },

    #[error("integer overflow in U{bits}")]
    Overflow { bits: u32 },

    #[error("integer underflow in U{bits}")]
    Underflow { bits: u32 },

    #[error("divided by 0")]
    DivisionByZero,

    #[error("unsupported networkId: \"{0}\"")]
    InvalidNetworkId(String),
}

impl TypesError {
    /// True for overflow, underflow and division by zero.
    pub fn is_range_violation(&self) -> bool {
        matches!(
            self,
            Self::Overflow { .. } | Self::Underflow { .. } | Self::DivisionByZero
        )
    }
}
