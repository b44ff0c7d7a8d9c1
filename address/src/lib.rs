//! CodeChain addresses.
//!
//! - [`bech32`]: the checksummed base-32 text codec (no `1` separator)
//! - [`AccountAddress`]: `<network>c` + `[version][account id]`
//! - [`AssetAddress`]: `<network>a` + `[version][type][payload]`
//! - [`AddressConfig`]: TOML-backed defaults for building addresses

pub mod account;
pub mod asset;
pub mod bech32;
pub mod config;
pub mod error;
pub mod payload;

pub use account::{AccountAddress, IntoAccountAddress, IntoAccountId};
pub use asset::{AssetAddress, IntoAssetAddress};
pub use crate::bech32::{Bech32Error, Decoded, DEFAULT_LENGTH_LIMIT};
pub use config::{
    AddressConfig, AddressOptions, ASSET_LENGTH_LIMIT, MIN_ASSET_LENGTH, SUPPORTED_VERSION,
};
pub use error::AddressError;
pub use payload::{AddressPayload, AssetAddressType, Multisig};
