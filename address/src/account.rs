//! Account (platform) addresses: `[version][account id]` under the prefix
//! `<network id>c`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use codechain_crypto::account_id_from_public;
use codechain_types::{NetworkId, H160, H512};

use crate::bech32::{self, DEFAULT_LENGTH_LIMIT};
use crate::config::{AddressOptions, SUPPORTED_VERSION};
use crate::AddressError;

const KIND: &str = "account";
const DISCRIMINATOR: char = 'c';
/// Characters after the prefix: 33 data words plus the checksum.
const BODY_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountAddress {
    version: u8,
    network_id: NetworkId,
    account_id: H160,
    value: String,
}

impl AccountAddress {
    pub fn from_account_id(
        account_id: &H160,
        options: &AddressOptions,
    ) -> Result<Self, AddressError> {
        if options.version != SUPPORTED_VERSION {
            return Err(AddressError::UnsupportedVersion {
                kind: KIND,
                version: options.version,
            });
        }

        let mut bytes = Vec::with_capacity(1 + H160::LEN);
        bytes.push(options.version);
        bytes.extend_from_slice(account_id.as_bytes());
        let prefix = format!("{}{}", options.network_id, DISCRIMINATOR);
        let value = bech32::encode(&prefix, &bech32::to_words(&bytes), DEFAULT_LENGTH_LIMIT)?;

        tracing::trace!(address = %value, "account address built");
        Ok(Self {
            version: options.version,
            network_id: options.network_id.clone(),
            account_id: *account_id,
            value,
        })
    }

    /// Build from a 64-byte public key; the account id is its Blake2b-160.
    pub fn from_public(public: &H512, options: &AddressOptions) -> Result<Self, AddressError> {
        Self::from_account_id(&account_id_from_public(public), options)
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

        let decoded = bech32::decode(text, prefix, DEFAULT_LENGTH_LIMIT).map_err(|e| {
            tracing::debug!(error = %e, "account address rejected");
            e
        })?;
        let bytes = bech32::from_words(&decoded.words)?;
        let (&version, account_id) = bytes
            .split_first()
            .ok_or_else(|| AddressError::InvalidPayload("empty payload".into()))?;
        if version != SUPPORTED_VERSION {
            return Err(AddressError::UnsupportedVersion {
                kind: KIND,
                version,
            });
        }
        let account_id = H160::from_slice(account_id)
            .map_err(|e| AddressError::InvalidAccountId(e.to_string()))?;
        let network_id = NetworkId::new(&decoded.prefix[..2])
            .map_err(|e| AddressError::InvalidNetworkId(e.to_string()))?;

        Ok(Self {
            version,
            network_id,
            account_id,
            value: text.to_lowercase(),
        })
    }

    /// Shape check only: two characters, `c`, then 40 alphabet characters.
    /// The checksum is not verified; use [`AccountAddress::from_string`] for that.
    pub fn check(value: impl IntoAccountAddress) -> bool {
        value.is_account_address()
    }

    /// Return an address as is, or parse text.
    pub fn ensure(value: impl IntoAccountAddress) -> Result<Self, AddressError> {
        value.into_account_address()
    }

    /// Account id of an address, a raw id, 40 hex digits, or address text.
    pub fn ensure_account(value: impl IntoAccountId) -> Result<H160, AddressError> {
        value.into_account_id()
    }

    pub fn account_id(&self) -> &H160 {
        &self.account_id
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
    head_ok && body.len() == BODY_LEN && bech32::is_alphabet(body)
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_string(&text).map_err(de::Error::custom)
    }
}

/// Values accepted by [`AccountAddress::check`] and [`AccountAddress::ensure`].
pub trait IntoAccountAddress {
    fn is_account_address(&self) -> bool;
    fn into_account_address(self) -> Result<AccountAddress, AddressError>;
}

impl IntoAccountAddress for AccountAddress {
    fn is_account_address(&self) -> bool {
        true
    }

    fn into_account_address(self) -> Result<AccountAddress, AddressError> {
        Ok(self)
    }
}

impl IntoAccountAddress for &AccountAddress {
    fn is_account_address(&self) -> bool {
        true
    }

    fn into_account_address(self) -> Result<AccountAddress, AddressError> {
        Ok(self.clone())
    }
}

impl IntoAccountAddress for &str {
    fn is_account_address(&self) -> bool {
        check_string(self)
    }

    fn into_account_address(self) -> Result<AccountAddress, AddressError> {
        AccountAddress::from_string(self)
    }
}

impl IntoAccountAddress for &String {
    fn is_account_address(&self) -> bool {
        check_string(self)
    }

    fn into_account_address(self) -> Result<AccountAddress, AddressError> {
        AccountAddress::from_string(self)
    }
}

/// Values accepted by [`AccountAddress::ensure_account`].
pub trait IntoAccountId {
    fn into_account_id(self) -> Result<H160, AddressError>;
}

impl IntoAccountId for AccountAddress {
    fn into_account_id(self) -> Result<H160, AddressError> {
        Ok(self.account_id)
    }
}

impl IntoAccountId for &AccountAddress {
    fn into_account_id(self) -> Result<H160, AddressError> {
        Ok(self.account_id)
    }
}

impl IntoAccountId for H160 {
    fn into_account_id(self) -> Result<H160, AddressError> {
        Ok(self)
    }
}

impl IntoAccountId for &H160 {
    fn into_account_id(self) -> Result<H160, AddressError> {
        Ok(*self)
    }
}

impl IntoAccountId for &str {
    fn into_account_id(self) -> Result<H160, AddressError> {
        if H160::check(self) {
            return Ok(H160::from_hex(self)?);
        }
        Ok(AccountAddress::from_string(self)?.account_id)
    }
}

impl IntoAccountId for &String {
    fn into_account_id(self) -> Result<H160, AddressError> {
        self.as_str().into_account_id()
    }
}
