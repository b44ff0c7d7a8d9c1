//! End-to-end address scenarios with fixed expected text.

use codechain_address::{
    AccountAddress, AddressOptions, AddressPayload, AssetAddress, AssetAddressType, Multisig,
};
use codechain_types::{NetworkId, H160};

#[test]
fn account_address_per_network() {
    let account_id = H160::from_hex("7b5e0ee8644c6f585fc297364143280a45844502").unwrap();

    let mainnet = AddressOptions::new(NetworkId::mainnet());
    let address = AccountAddress::from_account_id(&account_id, &mainnet).unwrap();
    assert_eq!(address.value(), "cccq9a4urhgv3xx7kzlc2tnvs2r9q9ytpz9qgs7q0a7");

    let testnet = AddressOptions::new(NetworkId::testnet());
    let address = AccountAddress::from_account_id(&account_id, &testnet).unwrap();
    assert_eq!(address.value(), "tccq9a4urhgv3xx7kzlc2tnvs2r9q9ytpz9qgcejvw8");
}

#[test]
fn multisig_asset_address() {
    let keys = vec![H160::new([0x11; 20]), H160::new([0x22; 20])];
    let multisig = Multisig::new(2, 1, keys.clone()).unwrap();
    let options = AddressOptions::new(NetworkId::testnet());
    let address = AssetAddress::from_type_and_payload(3, multisig, &options).unwrap();
    let expected = "tcaqypsyqg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyfzyg3zyg3zyg3zyg3zyg3zyg3zyg3zygsn28hf0";
    assert_eq!(address.value(), expected);

    let parsed = AssetAddress::from_string(expected).unwrap();
    assert_eq!(parsed.asset_type(), AssetAddressType::Multisig);
    let AddressPayload::Multisig(multisig) = parsed.payload() else {
        panic!("expected a multisig payload");
    };
    assert_eq!(multisig.total(), 2);
    assert_eq!(multisig.required(), 1);
    assert_eq!(multisig.keys(), keys.as_slice());
}

#[test]
fn hex_formatting() {
    assert_eq!(codechain_utils::to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn asset_type_and_version_support() {
    let hash = H160::new([0x33; 20]);
    let options = AddressOptions::default();
    assert!(AssetAddress::from_type_and_payload(4, hash, &options).is_err());
    assert!(AssetAddress::from_type_and_payload(255, hash, &options).is_err());
    for tag in 0..=2u8 {
        let address = AssetAddress::from_type_and_payload(tag, hash, &options).unwrap();
        assert_eq!(AssetAddress::from_string(address.value()).unwrap(), address);
    }
    let v0 = AddressOptions::default().with_version(0);
    assert!(AssetAddress::from_type_and_payload(1, hash, &v0).is_err());
}

#[test]
fn any_single_character_flip_is_detected() {
    let text = "tccq9a4urhgv3xx7kzlc2tnvs2r9q9ytpz9qgcejvw8";
    for i in 3..text.len() {
        let mut bytes = text.as_bytes().to_vec();
        bytes[i] = if bytes[i] == b'q' { b'p' } else { b'q' };
        let flipped = String::from_utf8(bytes).unwrap();
        let err = AccountAddress::from_string(&flipped).unwrap_err();
        assert!(err.is_checksum_error(), "position {}: {}", i, err);
    }
}

#[test]
fn any_single_character_flip_in_multisig_is_detected() {
    let text = "tcaqypsyqg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyfzyg3zyg3zyg3zyg3zyg3zyg3zyg3zygsn28hf0";
    assert!(AssetAddress::from_string(text).is_ok());
    for i in 3..text.len() {
        let mut bytes = text.as_bytes().to_vec();
        bytes[i] = if bytes[i] == b'q' { b'p' } else { b'q' };
        let flipped = String::from_utf8(bytes).unwrap();
        let err = AssetAddress::from_string(&flipped).unwrap_err();
        assert!(err.is_checksum_error(), "position {}: {}", i, err);
    }
}

#[test]
fn invalid_checksum_is_distinguished() {
    let err = AccountAddress::from_string("cccqpa4urhgv3xx7kzlc2tnvs2r9q9ytpz9qgqqqqqq").unwrap_err();
    assert!(err.is_checksum_error());

    let err = AccountAddress::from_string("cccq9a4urhgv3xx7kzlc2tnvs2r9q9ytpz9qgs7q0ab").unwrap_err();
    assert!(!err.is_checksum_error());
}

#[test]
fn config_drives_construction() {
    let config = codechain_address::AddressConfig::from_toml_str(r#"network_id = "cc""#).unwrap();
    let options = config.options().unwrap();
    let account_id = H160::from_hex("7b5e0ee8644c6f585fc297364143280a45844502").unwrap();
    let address = AccountAddress::from_account_id(&account_id, &options).unwrap();
    assert_eq!(address.value(), "cccq9a4urhgv3xx7kzlc2tnvs2r9q9ytpz9qgs7q0a7");
}
