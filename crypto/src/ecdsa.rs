//! ECDSA over secp256k1 with recoverable signatures.
//!
//! Signatures are deterministic (RFC 6979) and always carry a low `s`.
//! `v` is the recovery id in `0..=3`.

use codechain_types::{H256, H512, U256};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::FieldBytes;
use serde::{Deserialize, Serialize};

use crate::keys::{public_point, secret_scalar};
use crate::CryptoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EcdsaSignature {
    pub r: U256,
    pub s: U256,
    pub v: u8,
}

impl EcdsaSignature {
    fn to_k256(self) -> Result<(Signature, RecoveryId), CryptoError> {
        let signature = Signature::from_scalars(
            FieldBytes::from(self.r.to_big_endian()),
            FieldBytes::from(self.s.to_big_endian()),
        )
        .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        let recovery_id =
            RecoveryId::from_byte(self.v).ok_or(CryptoError::InvalidRecoveryId(self.v))?;
        Ok((signature, recovery_id))
    }
}

/// Sign a 32-byte message digest.
pub fn sign_ecdsa(message: &H256, private: &H256) -> Result<EcdsaSignature, CryptoError> {
    secret_scalar(private)?;
    let signing_key = SigningKey::from_bytes(&FieldBytes::from(private.to_bytes()))
        .map_err(|_| CryptoError::InvalidPrivateKey)?;
    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(message.as_bytes())
        .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

    let (r, s) = signature.split_bytes();
    Ok(EcdsaSignature {
        r: U256::from_big_endian(&r)?,
        s: U256::from_big_endian(&s)?,
        v: recovery_id.to_byte(),
    })
}

/// Check a signature against a message digest and public key. Malformed
/// inputs verify as `false`.
pub fn verify_ecdsa(message: &H256, signature: &EcdsaSignature, public: &H512) -> bool {
    let Ok(point) = public_point(public) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_affine(point) else {
        return false;
    };
    let Ok((signature, _)) = signature.to_k256() else {
        return false;
    };
    verifying_key
        .verify_prehash(message.as_bytes(), &signature)
        .is_ok()
}

/// Recover the signer's public key using the signature's recovery id.
pub fn recover_ecdsa(message: &H256, signature: &EcdsaSignature) -> Result<H512, CryptoError> {
    let (sig, recovery_id) = signature.to_k256()?;
    let verifying_key = VerifyingKey::recover_from_prehash(message.as_bytes(), &sig, recovery_id)
        .map_err(|e| CryptoError::RecoveryFailed(e.to_string()))?;
    let encoded = verifying_key.to_encoded_point(false);
    match encoded.as_bytes().split_first() {
        Some((&0x04, xy)) => Ok(H512::from_slice(xy)?),
        _ => Err(CryptoError::RecoveryFailed("unexpected point encoding".into())),
    }
}
