//! Fundamental value types for the CodeChain primitives.
//!
//! This crate defines the types shared by every other crate in the workspace:
//! fixed-width hashes (`H128`..`H512`), bounded unsigned integers
//! (`U64`..`U256`), network identifiers, and their canonical RLP encoding.

mod codec;
pub mod error;
pub mod hash;
pub mod network;
pub mod uint;

pub use error::TypesError;
pub use hash::{FixedHash, IntoHash, H128, H160, H256, H512};
pub use network::NetworkId;
pub use uint::{IntoUint, Uint, U128, U256, U64};
