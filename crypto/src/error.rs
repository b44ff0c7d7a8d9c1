//! Errors raised by key handling and signature operations.

use codechain_types::TypesError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("invalid private key")]
    InvalidPrivateKey,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid s value")]
    InvalidS,

    #[error("invalid hash value")]
    InvalidHash,

    #[error("invalid r value")]
    InvalidR,

    #[error("recovered public key is the point at infinity")]
    RecoveredInfinity,

    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    #[error("public key recovery failed: {0}")]
    RecoveryFailed(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("key too long: at most {max} bytes, got {actual}")]
    InvalidKeyLength { max: usize, actual: usize },

    #[error("nonce generator failure: {0}")]
    Drbg(String),

    #[error(transparent)]
    Types(#[from] TypesError),
}
