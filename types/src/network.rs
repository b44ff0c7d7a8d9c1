//! Network identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// Two-character network id that starts every address prefix.
///
/// Only lowercase ASCII letters and digits are accepted, so the id survives
/// the case folding of the address text unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NetworkId(String);

impl NetworkId {
    pub const MAINNET: &'static str = "cc";
    pub const TESTNET: &'static str = "tc";

    pub fn new(id: &str) -> Result<Self, TypesError> {
        let valid = id.len() == 2
            && id
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
        if !valid {
            return Err(TypesError::InvalidNetworkId(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    pub fn mainnet() -> Self {
        Self(Self::MAINNET.to_string())
    }

    pub fn testnet() -> Self {
        Self(Self::TESTNET.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::testnet()
    }
}

impl FromStr for NetworkId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NetworkId {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<NetworkId> for String {
    fn from(id: NetworkId) -> Self {
        id.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
