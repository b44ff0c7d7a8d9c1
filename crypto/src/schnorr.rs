//! Schnorr signatures over secp256k1 with SHA-256 challenges.
//!
//! A signature is `(r, s)` where `r` is the x coordinate of the nonce point
//! `R = kG` (with `k` negated so that `R` has even y), `h = SHA256(r ‖ m)`
//! and `s = k - x·h mod n`. Verification recomputes `R' = sG + hP` and
//! checks that it has even y and x coordinate `r`. Because `h` is
//! invertible, the signer's public key can also be recovered from
//! `(m, r, s)` alone.
//!
//! Nonces are deterministic: an HMAC-SHA256 DRBG seeded with the private
//! key, the message reduced modulo `n`, and a fixed personalization string.

use std::fmt;

use codechain_types::{H256, H512, U256};
use k256::elliptic_curve::point::{AffineCoordinates, DecompressPoint};
use k256::elliptic_curve::subtle::Choice;
use k256::{AffinePoint, FieldBytes, ProjectivePoint, Scalar};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::drbg::HmacDrbg;
use crate::hash::sha256_multi;
use crate::keys::{encode_public, public_point, reduce_scalar, scalar_below_order, secret_scalar};
use crate::CryptoError;

const PERSONALIZATION: &[u8; 16] = b"Schnorr+SHA256  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchnorrSignature {
    pub r: U256,
    pub s: U256,
}

impl SchnorrSignature {
    pub fn new(r: U256, s: U256) -> Self {
        Self { r, s }
    }

    /// Parse each scalar from 1 to 64 hex digits.
    pub fn from_hex(r: &str, s: &str) -> Result<Self, CryptoError> {
        Ok(Self {
            r: parse_scalar_hex("r", r)?,
            s: parse_scalar_hex("s", s)?,
        })
    }

    /// r ‖ s, 32 bytes each.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.r.to_big_endian());
        bytes[32..].copy_from_slice(&self.s.to_big_endian());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != 64 {
            return Err(CryptoError::InvalidSignature(format!(
                "expected 64 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self {
            r: U256::from_big_endian(&bytes[..32])?,
            s: U256::from_big_endian(&bytes[32..])?,
        })
    }
}

impl fmt::Display for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            H256::new(self.r.to_big_endian()),
            H256::new(self.s.to_big_endian())
        )
    }
}

fn parse_scalar_hex(name: &str, value: &str) -> Result<U256, CryptoError> {
    if value.is_empty() || value.len() > 64 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CryptoError::InvalidSignature(format!(
            "{} must be 1 to 64 hex digits, got {:?}",
            name, value
        )));
    }
    Ok(U256::from_hex(value)?)
}

/// Challenge scalar `SHA256(r ‖ m)`, or `None` if it is zero or not below `n`.
fn challenge(r: &[u8; 32], message: &H256) -> Option<Scalar> {
    let digest = sha256_multi(&[r.as_slice(), message.as_bytes().as_slice()]);
    scalar_below_order(digest).filter(|h| !bool::from(h.is_zero()))
}

/// Sign a 32-byte message. The same key and message always yield the same
/// signature.
pub fn sign_schnorr(message: &H256, private: &H256) -> Result<SchnorrSignature, CryptoError> {
    let secret = secret_scalar(private)?;
    let nonce_seed = reduce_scalar(message.to_bytes()).to_bytes();
    let mut drbg = HmacDrbg::new(private.as_bytes(), &nonce_seed, PERSONALIZATION)?;

    let mut candidate = [0u8; 32];
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        drbg.generate(&mut candidate)?;
        let mut k = reduce_scalar(candidate);
        if k == Scalar::ZERO || k == Scalar::ONE {
            tracing::trace!(attempt, "schnorr nonce out of range, drawing again");
            continue;
        }

        let point = (ProjectivePoint::GENERATOR * k).to_affine();
        if point == AffinePoint::IDENTITY {
            tracing::trace!(attempt, "schnorr nonce point at infinity, drawing again");
            continue;
        }
        if bool::from(point.y_is_odd()) {
            k = -k;
        }

        let mut r = [0u8; 32];
        r.copy_from_slice(&point.x());
        let Some(h) = challenge(&r, message) else {
            tracing::trace!(attempt, "schnorr challenge out of range, drawing again");
            continue;
        };

        let s = k - secret * h;
        candidate.zeroize();
        return Ok(SchnorrSignature {
            r: U256::from_big_endian(&r)?,
            s: U256::from_big_endian(&s.to_bytes())?,
        });
    }
}

/// Check a signature against a message and public key. Malformed inputs
/// verify as `false`.
pub fn verify_schnorr(message: &H256, signature: &SchnorrSignature, public: &H512) -> bool {
    let Ok(public) = public_point(public) else {
        return false;
    };
    let Some(s) = scalar_below_order(signature.s.to_big_endian()) else {
        return false;
    };
    let r = signature.r.to_big_endian();
    let Some(h) = challenge(&r, message) else {
        return false;
    };

    let candidate = (ProjectivePoint::GENERATOR * s + ProjectivePoint::from(public) * h).to_affine();
    if candidate == AffinePoint::IDENTITY || bool::from(candidate.y_is_odd()) {
        return false;
    }
    candidate.x() == FieldBytes::from(r)
}

/// Recover the signer's public key from a message and signature.
pub fn recover_schnorr(message: &H256, signature: &SchnorrSignature) -> Result<H512, CryptoError> {
    let s = scalar_below_order(signature.s.to_big_endian()).ok_or(CryptoError::InvalidS)?;
    let r = signature.r.to_big_endian();
    let h = challenge(&r, message).ok_or(CryptoError::InvalidHash)?;
    let h_inv = Option::<Scalar>::from(h.invert()).ok_or(CryptoError::InvalidHash)?;

    let nonce_point =
        Option::<AffinePoint>::from(AffinePoint::decompress(&FieldBytes::from(r), Choice::from(0)))
            .ok_or(CryptoError::InvalidR)?;

    let public = ProjectivePoint::GENERATOR * (-s * h_inv) + ProjectivePoint::from(nonce_point) * h_inv;
    let public = public.to_affine();
    if public == AffinePoint::IDENTITY {
        return Err(CryptoError::RecoveredInfinity);
    }
    encode_public(&public)
}
