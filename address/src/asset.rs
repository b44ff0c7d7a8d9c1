//! Asset-transfer addresses: `[version][type][payload]` under the prefix
//! `<network id>a`.
//!
//! Types 0..=2 carry one 20-byte hash. Type 3 carries a multisig laid out as
//! `[n][m][key_1]..[key_n]`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use codechain_types::NetworkId;

use crate::bech32;
use crate::config::{
    multisig_body_len, AddressOptions, ASSET_LENGTH_LIMIT, MAX_MULTISIG_KEYS, SUPPORTED_VERSION,
};
use crate::payload::{AddressPayload, AssetAddressType};
use crate::AddressError;

const KIND: &str = "asset transfer";
const DISCRIMINATOR: char = 'a';
/// Characters after the prefix for a single-hash payload.
const SINGLE_HASH_BODY_LEN: usize = 42;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetAddress {
    version: u8,
    asset_type: AssetAddressType,
    network_id: NetworkId,
    payload: AddressPayload,
    value: String,
}

impl AssetAddress {
    pub fn from_type_and_payload(
        asset_type: u8,
        payload: impl Into<AddressPayload>,
        options: &AddressOptions,
    ) -> Result<Self, AddressError> {
        if options.version != SUPPORTED_VERSION {
            return Err(AddressError::UnsupportedVersion {
                kind: KIND,
                version: options.version,
            });
        }
        let asset_type = AssetAddressType::try_from(asset_type)?;
        let payload = payload.into();
        payload.check_type(asset_type)?;

        let mut bytes = vec![options.version, asset_type.tag()];
        bytes.extend_from_slice(&payload.to_bytes());
        let prefix = format!("{}{}", options.network_id, DISCRIMINATOR);
        let value = bech32::encode(&prefix, &bech32::to_words(&bytes), options.length_limit)?;

        tracing::trace!(address = %value, %asset_type, "asset address built");
        Ok(Self {
            version: options.version,
            asset_type,
            network_id: options.network_id.clone(),
            payload,
            value,
        })
    }

    pub fn from_string(text: &str) -> Result<Self, AddressError> {
        let unknown_prefix = || AddressError::UnknownPrefix {
            kind: KIND,
            value: text.to_string(),
        };
        let prefix = text.get(..3).ok_or_else(unknown_prefix)?;
        if !prefix.to_ascii_lowercase().ends_with(DISCRIMINATOR) {
            return Err(unknown_prefix());
        }

        let decoded = bech32::decode(text, prefix, ASSET_LENGTH_LIMIT).map_err(|e| {
            tracing::debug!(error = %e, "asset address rejected");
            e
        })?;
        let bytes = bech32::from_words(&decoded.words)?;
        let [version, tag, body @ ..] = bytes.as_slice() else {
            return Err(AddressError::InvalidPayload(
                "missing version or type".into(),
            ));
        };
        if *version != SUPPORTED_VERSION {
            return Err(AddressError::UnsupportedVersion {
                kind: KIND,
                version: *version,
            });
        }
        let asset_type = AssetAddressType::try_from(*tag)?;
        let payload = AddressPayload::from_bytes(asset_type, body)?;
        let network_id = NetworkId::new(&decoded.prefix[..2])
            .map_err(|e| AddressError::InvalidNetworkId(e.to_string()))?;

        Ok(Self {
            version: *version,
            asset_type,
            network_id,
            payload,
            value: text.to_lowercase(),
        })
    }

    /// Shape check only: two characters, `a`, then alphabet characters whose
    /// count fits a single-hash or multisig payload. The checksum is not
    /// verified; use [`AssetAddress::from_string`] for that.
    pub fn check(value: impl IntoAssetAddress) -> bool {
        value.is_asset_address()
    }

    /// Return an address as is, or parse text.
    pub fn ensure(value: impl IntoAssetAddress) -> Result<Self, AddressError> {
        value.into_asset_address()
    }

    pub fn asset_type(&self) -> AssetAddressType {
        self.asset_type
    }

    pub fn payload(&self) -> &AddressPayload {
        &self.payload
    }

    pub fn network_id(&self) -> &NetworkId {
        &self.network_id
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

fn check_string(value: &str) -> bool {
    let mut chars = value.chars();
    let head_ok = chars.next().is_some_and(|c| c != '\n')
        && chars.next().is_some_and(|c| c != '\n')
        && chars.next() == Some(DISCRIMINATOR);
    let body = chars.as_str();
    if !head_ok || !bech32::is_alphabet(body) {
        return false;
    }
    body.len() == SINGLE_HASH_BODY_LEN
        || (1..=MAX_MULTISIG_KEYS).any(|n| multisig_body_len(n) == body.len())
}

impl fmt::Display for AssetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for AssetAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl Serialize for AssetAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for AssetAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_string(&text).map_err(de::Error::custom)
    }
}

/// Values accepted by [`AssetAddress::check`] and [`AssetAddress::ensure`].
pub trait IntoAssetAddress {
    fn is_asset_address(&self) -> bool;
    fn into_asset_address(self) -> Result<AssetAddress, AddressError>;
}

impl IntoAssetAddress for AssetAddress {
    fn is_asset_address(&self) -> bool {
        true
    }

    fn into_asset_address(self) -> Result<AssetAddress, AddressError> {
        Ok(self)
    }
}

impl IntoAssetAddress for &AssetAddress {
    fn is_asset_address(&self) -> bool {
        true
    }

    fn into_asset_address(self) -> Result<AssetAddress, AddressError> {
        Ok(self.clone())
    }
}

impl IntoAssetAddress for &str {
    fn is_asset_address(&self) -> bool {
        check_string(self)
    }

    fn into_asset_address(self) -> Result<AssetAddress, AddressError> {
        AssetAddress::from_string(self)
    }
}

impl IntoAssetAddress for &String {
    fn is_asset_address(&self) -> bool {
        check_string(self)
    }

    fn into_asset_address(self) -> Result<AssetAddress, AddressError> {
        AssetAddress::from_string(self)
    }
}
