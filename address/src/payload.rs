//! Typed payloads carried by asset-transfer addresses.

use std::fmt;

use codechain_types::H160;

use crate::AddressError;

/// Width of every hash carried in a payload.
pub const HASH_LEN: usize = 20;

/// The type tag of an asset-transfer address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AssetAddressType {
    LockScriptHash = 0,
    PayToPublicKeyHash = 1,
    PayToPublicKeyHashBurn = 2,
    Multisig = 3,
}

impl AssetAddressType {
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Whether this type carries a [`Multisig`] rather than a single hash.
    pub fn is_multisig(self) -> bool {
        self == AssetAddressType::Multisig
    }
}

impl TryFrom<u8> for AssetAddressType {
    type Error = AddressError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::LockScriptHash),
            1 => Ok(Self::PayToPublicKeyHash),
            2 => Ok(Self::PayToPublicKeyHashBurn),
            3 => Ok(Self::Multisig),
            other => Err(AddressError::UnsupportedType(other)),
        }
    }
}

impl fmt::Display for AssetAddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LockScriptHash => "lock-script-hash",
            Self::PayToPublicKeyHash => "pay-to-public-key-hash",
            Self::PayToPublicKeyHashBurn => "pay-to-public-key-hash-burn",
            Self::Multisig => "multisig",
        };
        f.write_str(name)
    }
}

/// An m-of-n set of public key hashes.
///
/// Invariant: `1 <= required <= total == keys.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multisig {
    required: u8,
    total: u8,
    keys: Vec<H160>,
}

impl Multisig {
    pub fn new(total: u8, required: u8, keys: Vec<H160>) -> Result<Self, AddressError> {
        if keys.len() != total as usize {
            return Err(AddressError::InvalidMultisig(format!(
                "expected {} keys but found {}",
                total,
                keys.len()
            )));
        }
        if required == 0 || required > total {
            return Err(AddressError::InvalidMultisig(format!(
                "required signatures {} must be between 1 and {}",
                required, total
            )));
        }
        Ok(Self {
            required,
            total,
            keys,
        })
    }

    pub fn required(&self) -> u8 {
        self.required
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn keys(&self) -> &[H160] {
        &self.keys
    }

    /// `[n][m][key_1]..[key_n]`.
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 + self.keys.len() * HASH_LEN);
        bytes.push(self.total);
        bytes.push(self.required);
        for key in &self.keys {
            bytes.extend_from_slice(key.as_bytes());
        }
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let [total, required, rest @ ..] = bytes else {
            return Err(AddressError::InvalidMultisig(
                "missing key count header".into(),
            ));
        };
        if rest.len() != *total as usize * HASH_LEN {
            return Err(AddressError::InvalidMultisig(format!(
                "expected {} bytes of keys but found {}",
                *total as usize * HASH_LEN,
                rest.len()
            )));
        }
        let keys = rest
            .chunks_exact(HASH_LEN)
            .map(H160::from_slice)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(*total, *required, keys)
    }
}

/// What an asset-transfer address points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressPayload {
    SingleHash(H160),
    Multisig(Multisig),
}

impl AddressPayload {
    /// Check that this payload is the shape `asset_type` carries.
    pub(crate) fn check_type(&self, asset_type: AssetAddressType) -> Result<(), AddressError> {
        match (asset_type.is_multisig(), self) {
            (false, AddressPayload::SingleHash(_)) | (true, AddressPayload::Multisig(_)) => Ok(()),
            (false, AddressPayload::Multisig(_)) => Err(AddressError::InvalidPayload(format!(
                "{} address needs a single hash, found a multisig",
                asset_type
            ))),
            (true, AddressPayload::SingleHash(_)) => Err(AddressError::InvalidPayload(
                "multisig address needs a multisig payload, found a single hash".into(),
            )),
        }
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        match self {
            AddressPayload::SingleHash(hash) => hash.as_bytes().to_vec(),
            AddressPayload::Multisig(multisig) => multisig.to_bytes(),
        }
    }

    pub(crate) fn from_bytes(
        asset_type: AssetAddressType,
        bytes: &[u8],
    ) -> Result<Self, AddressError> {
        if asset_type.is_multisig() {
            return Ok(AddressPayload::Multisig(Multisig::from_bytes(bytes)?));
        }
        let hash = H160::from_slice(bytes).map_err(|_| {
            AddressError::InvalidPayload(format!(
                "expected {} bytes but found {}",
                HASH_LEN,
                bytes.len()
            ))
        })?;
        Ok(AddressPayload::SingleHash(hash))
    }
}

impl From<H160> for AddressPayload {
    fn from(hash: H160) -> Self {
        AddressPayload::SingleHash(hash)
    }
}

impl From<Multisig> for AddressPayload {
    fn from(multisig: Multisig) -> Self {
        AddressPayload::Multisig(multisig)
    }
}
