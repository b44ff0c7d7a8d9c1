//! Cryptographic primitives for CodeChain addresses and signatures.
//!
//! - **secp256k1** keys: 32-byte private scalars, 64-byte uncompressed public keys
//! - **Schnorr** signatures with deterministic nonces and public key recovery
//! - **ECDSA** recoverable signatures (RFC 6979, low-S)
//! - **Blake2b** (128/160/256, optionally keyed), **RIPEMD-160**, **SHA-256**

pub mod drbg;
pub mod ecdsa;
pub mod error;
pub mod hash;
pub mod keys;
pub mod schnorr;

pub use drbg::HmacDrbg;
pub use ecdsa::{recover_ecdsa, sign_ecdsa, verify_ecdsa, EcdsaSignature};
pub use error::CryptoError;
pub use hash::{
    blake128, blake128_with_key, blake160, blake160_with_key, blake256, blake256_with_key,
    ripemd160, sha256, BLAKE_MAX_KEY_LEN,
};
pub use keys::{
    account_id_from_private, account_id_from_public, generate_private_key, is_valid_public,
    public_from_private,
};
pub use schnorr::{recover_schnorr, sign_schnorr, verify_schnorr, SchnorrSignature};
