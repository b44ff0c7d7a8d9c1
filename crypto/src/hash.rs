//! Blake2b, RIPEMD-160 and SHA-256 digests with typed outputs.

use blake2::digest::consts::{U16, U20, U32};
use blake2::digest::{KeyInit, Mac};
use blake2::{Blake2b, Blake2bMac, Digest};
use codechain_types::{FixedHash, H128, H160, H256};
use ripemd::Ripemd160;
use sha2::Sha256;

use crate::CryptoError;

/// Longest key Blake2b accepts in keyed mode.
pub const BLAKE_MAX_KEY_LEN: usize = 64;

fn fixed<const N: usize>(digest: &[u8]) -> FixedHash<N> {
    let mut output = [0u8; N];
    output.copy_from_slice(digest);
    FixedHash::new(output)
}

fn unkeyed<D: Digest, const N: usize>(data: &[u8]) -> FixedHash<N> {
    fixed(&D::digest(data))
}

fn keyed<M: Mac + KeyInit, D: Digest, const N: usize>(
    data: &[u8],
    key: &[u8],
) -> Result<FixedHash<N>, CryptoError> {
    if key.is_empty() {
        return Ok(unkeyed::<D, N>(data));
    }
    let too_long = || CryptoError::InvalidKeyLength {
        max: BLAKE_MAX_KEY_LEN,
        actual: key.len(),
    };
    if key.len() > BLAKE_MAX_KEY_LEN {
        return Err(too_long());
    }
    let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|_| too_long())?;
    Mac::update(&mut mac, data);
    Ok(fixed(&mac.finalize().into_bytes()))
}

pub fn blake128(data: &[u8]) -> H128 {
    unkeyed::<Blake2b<U16>, 16>(data)
}

pub fn blake160(data: &[u8]) -> H160 {
    unkeyed::<Blake2b<U20>, 20>(data)
}

pub fn blake256(data: &[u8]) -> H256 {
    unkeyed::<Blake2b<U32>, 32>(data)
}

/// Keyed Blake2b-128. An empty key is the unkeyed digest.
pub fn blake128_with_key(data: &[u8], key: &[u8]) -> Result<H128, CryptoError> {
    keyed::<Blake2bMac<U16>, Blake2b<U16>, 16>(data, key)
}

/// Keyed Blake2b-160. An empty key is the unkeyed digest.
pub fn blake160_with_key(data: &[u8], key: &[u8]) -> Result<H160, CryptoError> {
    keyed::<Blake2bMac<U20>, Blake2b<U20>, 20>(data, key)
}

/// Keyed Blake2b-256. An empty key is the unkeyed digest.
pub fn blake256_with_key(data: &[u8], key: &[u8]) -> Result<H256, CryptoError> {
    keyed::<Blake2bMac<U32>, Blake2b<U32>, 32>(data, key)
}

pub fn ripemd160(data: &[u8]) -> H160 {
    unkeyed::<Ripemd160, 20>(data)
}

pub fn sha256(data: &[u8]) -> H256 {
    unkeyed::<Sha256, 32>(data)
}

/// SHA-256 over several slices in sequence.
pub(crate) fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}
