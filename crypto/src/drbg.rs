//! HMAC-SHA256 deterministic random bit generator (NIST SP 800-90A, as
//! profiled by RFC 6979 §3.2). Used to derive signing nonces.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::CryptoError;

type HmacSha256 = Hmac<Sha256>;

/// Generator state. Both words are wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacDrbg {
    k: [u8; 32],
    v: [u8; 32],
}

impl HmacDrbg {
    /// Instantiate from entropy ‖ nonce ‖ personalization.
    pub fn new(entropy: &[u8], nonce: &[u8], personalization: &[u8]) -> Result<Self, CryptoError> {
        let mut drbg = Self {
            k: [0x00; 32],
            v: [0x01; 32],
        };
        drbg.update(&[entropy, nonce, personalization])?;
        Ok(drbg)
    }

    fn hmac(&self, parts: &[&[u8]]) -> Result<[u8; 32], CryptoError> {
        let mut mac =
            HmacSha256::new_from_slice(&self.k).map_err(|e| CryptoError::Drbg(e.to_string()))?;
        for part in parts {
            mac.update(part);
        }
        let mut output = [0u8; 32];
        output.copy_from_slice(&mac.finalize().into_bytes());
        Ok(output)
    }

    fn update(&mut self, seed: &[&[u8]]) -> Result<(), CryptoError> {
        self.k = self.reseed_key(0x00, seed)?;
        self.v = self.hmac(&[self.v.as_slice()])?;
        if seed.iter().all(|part| part.is_empty()) {
            return Ok(());
        }
        self.k = self.reseed_key(0x01, seed)?;
        self.v = self.hmac(&[self.v.as_slice()])?;
        Ok(())
    }

    fn reseed_key(&self, round: u8, seed: &[&[u8]]) -> Result<[u8; 32], CryptoError> {
        let round = [round];
        let mut parts: Vec<&[u8]> = Vec::with_capacity(seed.len() + 2);
        parts.push(self.v.as_slice());
        parts.push(round.as_slice());
        parts.extend_from_slice(seed);
        self.hmac(&parts)
    }

    /// Fill `out` with generator output, then advance the state.
    pub fn generate(&mut self, out: &mut [u8]) -> Result<(), CryptoError> {
        for chunk in out.chunks_mut(32) {
            self.v = self.hmac(&[self.v.as_slice()])?;
            chunk.copy_from_slice(&self.v[..chunk.len()]);
        }
        self.update(&[])
    }
}
