//! Address options and their TOML-backed configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use codechain_types::NetworkId;

use crate::AddressError;

/// The only address version this crate produces or accepts.
pub const SUPPORTED_VERSION: u8 = 1;

/// Largest multisig an asset-transfer address can describe.
pub const MAX_MULTISIG_KEYS: usize = 255;

/// Characters after the 3-character prefix for an `n`-key multisig address.
pub const fn multisig_body_len(n: usize) -> usize {
    ((4 + 20 * n) * 8).div_ceil(5) + 6
}

/// Characters after the 3-character prefix for a single-hash address.
pub const fn hash_body_len() -> usize {
    ((2 + 20) * 8_usize).div_ceil(5) + 6
}

/// Length of the shortest asset-transfer address.
pub const MIN_ASSET_LENGTH: usize = 3 + 1 + hash_body_len();

/// Length bound that admits every asset-transfer address, up to a
/// 255-key multisig (prefix, separator step and checksum included).
pub const ASSET_LENGTH_LIMIT: usize = 3 + 1 + multisig_body_len(MAX_MULTISIG_KEYS);

/// Parameters for building an address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressOptions {
    pub network_id: NetworkId,
    pub version: u8,
    pub length_limit: usize,
}

impl AddressOptions {
    pub fn new(network_id: NetworkId) -> Self {
        Self {
            network_id,
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn with_length_limit(mut self, length_limit: usize) -> Self {
        self.length_limit = length_limit;
        self
    }
}

impl Default for AddressOptions {
    fn default() -> Self {
        Self {
            network_id: default_network_id(),
            version: default_version(),
            length_limit: default_length_limit(),
        }
    }
}

/// Address settings as loaded from a TOML file.
///
/// Can be loaded via [`AddressConfig::from_toml_file`] or built
/// programmatically; [`AddressConfig::options`] validates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressConfig {
    /// Two-character network id (`cc` mainnet, `tc` testnet).
    #[serde(default = "default_network_id")]
    pub network_id: NetworkId,

    #[serde(default = "default_version")]
    pub version: u8,

    /// Longest address text accepted when encoding asset-transfer addresses.
    #[serde(default = "default_length_limit")]
    pub length_limit: usize,
}

fn default_network_id() -> NetworkId {
    NetworkId::testnet()
}

fn default_version() -> u8 {
    SUPPORTED_VERSION
}

fn default_length_limit() -> usize {
    ASSET_LENGTH_LIMIT
}

impl AddressConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, AddressError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AddressError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, AddressError> {
        toml::from_str(s).map_err(|e| AddressError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, AddressError> {
        toml::to_string_pretty(self).map_err(|e| AddressError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), AddressError> {
        if self.version != SUPPORTED_VERSION {
            return Err(AddressError::UnsupportedVersion {
                kind: "configured",
                version: self.version,
            });
        }
        if self.length_limit < MIN_ASSET_LENGTH {
            return Err(AddressError::Config(format!(
                "length_limit {} is below the shortest address ({})",
                self.length_limit, MIN_ASSET_LENGTH
            )));
        }
        Ok(())
    }

    pub fn options(&self) -> Result<AddressOptions, AddressError> {
        self.validate()?;
        Ok(AddressOptions {
            network_id: self.network_id.clone(),
            version: self.version,
            length_limit: self.length_limit,
        })
    }
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            network_id: default_network_id(),
            version: default_version(),
            length_limit: default_length_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits() {
        assert_eq!(multisig_body_len(1), 45);
        assert_eq!(multisig_body_len(2), 77);
        assert_eq!(multisig_body_len(255), 8173);
        assert_eq!(ASSET_LENGTH_LIMIT, 8177);
        assert_eq!(hash_body_len(), 42);
        assert_eq!(MIN_ASSET_LENGTH, 46);
    }

    #[test]
    fn length_limit_floor_fits_single_hash_address() {
        let config = AddressConfig::from_toml_str("length_limit = 45").unwrap();
        assert!(matches!(config.options(), Err(AddressError::Config(_))));

        let options = AddressConfig::from_toml_str("length_limit = 46")
            .unwrap()
            .options()
            .unwrap();
        let address =
            crate::AssetAddress::from_type_and_payload(0, codechain_types::H160::zero(), &options)
                .unwrap();
        assert_eq!(address.value().len(), 46);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = AddressConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = AddressConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = AddressConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.network_id, NetworkId::testnet());
        assert_eq!(config.version, 1);
        assert_eq!(config.length_limit, ASSET_LENGTH_LIMIT);
        assert_eq!(config.options().unwrap(), AddressOptions::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = AddressConfig::from_toml_str(r#"network_id = "cc""#).expect("should parse");
        assert_eq!(config.network_id, NetworkId::mainnet());
        assert_eq!(config.version, 1); // default
        let options = config.options().unwrap();
        assert_eq!(options.network_id.as_str(), "cc");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            AddressConfig::from_toml_str(r#"network_id = "CCC""#),
            Err(AddressError::Config(_))
        ));
        let config = AddressConfig::from_toml_str("version = 0").unwrap();
        assert!(config.validate().unwrap_err().is_unsupported());
        let config = AddressConfig::from_toml_str("length_limit = 10").unwrap();
        assert!(matches!(config.options(), Err(AddressError::Config(_))));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("address.toml");
        std::fs::write(&path, "network_id = \"cc\"\nlength_limit = 90\n").unwrap();
        let config = AddressConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.network_id, NetworkId::mainnet());
        assert_eq!(config.length_limit, 90);
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = AddressConfig::from_toml_file("/nonexistent/address.toml");
        assert!(matches!(result, Err(AddressError::Config(_))));
    }
}
