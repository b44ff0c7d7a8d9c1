//! secp256k1 key handling.
//!
//! Private keys are 32-byte big-endian scalars in `[1, n)` carried as
//! `H256`. Public keys are the uncompressed point without its `0x04` tag,
//! x ‖ y, carried as `H512`.

use codechain_types::{H160, H256, H512};
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::PrimeField;
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar, SecretKey};
use rand::rngs::OsRng;

use crate::hash::blake160;
use crate::CryptoError;

/// Generate a fresh private key from the operating system RNG.
pub fn generate_private_key() -> H256 {
    let secret = SecretKey::random(&mut OsRng);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&secret.to_bytes());
    H256::new(bytes)
}

/// Derive the 64-byte public key of a private key.
pub fn public_from_private(private: &H256) -> Result<H512, CryptoError> {
    let secret = secret_scalar(private)?;
    encode_public(&(ProjectivePoint::GENERATOR * secret).to_affine())
}

/// Account id of a public key: Blake2b-160 over its 64 bytes.
pub fn account_id_from_public(public: &H512) -> H160 {
    blake160(public.as_bytes())
}

pub fn account_id_from_private(private: &H256) -> Result<H160, CryptoError> {
    Ok(account_id_from_public(&public_from_private(private)?))
}

/// True if `public` is a point on the curve.
pub fn is_valid_public(public: &H512) -> bool {
    public_point(public).is_ok()
}

pub(crate) fn secret_scalar(private: &H256) -> Result<Scalar, CryptoError> {
    let scalar: Option<Scalar> = Scalar::from_repr(FieldBytes::from(private.to_bytes())).into();
    scalar
        .filter(|s| !bool::from(s.is_zero()))
        .ok_or(CryptoError::InvalidPrivateKey)
}

/// Interpret 32 bytes as a scalar, or `None` if not below the group order.
pub(crate) fn scalar_below_order(bytes: [u8; 32]) -> Option<Scalar> {
    Scalar::from_repr(FieldBytes::from(bytes)).into()
}

/// Interpret 32 bytes as an integer reduced modulo the group order.
pub(crate) fn reduce_scalar(bytes: [u8; 32]) -> Scalar {
    <Scalar as Reduce<k256::U256>>::reduce_bytes(&FieldBytes::from(bytes))
}

pub(crate) fn public_point(public: &H512) -> Result<AffinePoint, CryptoError> {
    let bytes = public.as_bytes();
    let encoded = EncodedPoint::from_affine_coordinates(
        FieldBytes::from_slice(&bytes[..32]),
        FieldBytes::from_slice(&bytes[32..]),
        false,
    );
    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
        .ok_or(CryptoError::InvalidPublicKey)
}

pub(crate) fn encode_public(point: &AffinePoint) -> Result<H512, CryptoError> {
    let encoded = point.to_encoded_point(false);
    match encoded.as_bytes().split_first() {
        Some((&0x04, xy)) => Ok(H512::from_slice(xy)?),
        _ => Err(CryptoError::InvalidPublicKey),
    }
}
