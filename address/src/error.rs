//! Error type for address construction and parsing.

use codechain_types::TypesError;

use crate::bech32::Bech32Error;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("unknown prefix for {kind} address: {value:?}")]
    UnknownPrefix { kind: &'static str, value: String },

    #[error("unsupported version for {kind} address: {version}")]
    UnsupportedVersion { kind: &'static str, version: u8 },

    #[error("unsupported type for asset transfer address: {0}")]
    UnsupportedType(u8),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("invalid multisig: {0}")]
    InvalidMultisig(String),

    #[error("invalid network id: {0}")]
    InvalidNetworkId(String),

    #[error("invalid account id: {0}")]
    InvalidAccountId(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Bech32(#[from] Bech32Error),

    #[error(transparent)]
    Types(#[from] TypesError),
}

impl AddressError {
    /// True when the text looked like an address but its checksum failed.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, AddressError::Bech32(e) if e.is_checksum_error())
    }

    /// True for unknown version or type tags.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            AddressError::UnsupportedVersion { .. } | AddressError::UnsupportedType(_)
        )
    }
}
