use types::*;

#[test]
fn test_address_json_roundtrip() {
    let addr: Address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().expect("address");
    let json = serde_json::to_value(addr).expect("serialize");
    assert_eq!(json, "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");

    let back: Address = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, addr);
}

#[test]
fn test_address_rejects_wrong_width() {
    let err = "0x1234".parse::<Address>().expect_err("too short");
    assert_eq!(err, TypesError::InvalidLength { expected: 20, actual: 2 });

    let word = "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae";
    assert!(matches!(word.parse::<Address>(), Err(TypesError::InvalidLength { .. })));
    assert!(serde_json::from_str::<Address>("\"0xnothex\"").is_err());
}

#[test]
fn test_identifier_is_b256() {
    let id: Identifier = EMPTY_NODE;
    assert_eq!(id, B256::ZERO);
    assert_eq!(
        serde_json::to_string(&id).expect("serialize"),
        format!("\"0x{}\"", "0".repeat(64))
    );
}

#[test]
fn test_tx_hash_is_transparent() {
    let tx = TxHash::from("0xdeadbeef".to_string());
    assert_eq!(tx.as_str(), "0xdeadbeef");
    assert_eq!(tx.to_string(), "0xdeadbeef");
    assert_eq!(serde_json::to_value(&tx).expect("serialize"), "0xdeadbeef");
}

#[test]
fn test_record_keys_parse_from_json() {
    let keys: Vec<RecordKey> =
        serde_json::from_str(r#"["eth", "profile.avatar", "social.github"]"#).expect("keys");
    assert_eq!(keys, vec![RecordKey::Eth, RecordKey::ProfileAvatar, RecordKey::SocialGithub]);
    assert!(serde_json::from_str::<RecordKey>("\"ens\"").is_err());
}

#[test]
fn test_sentinels_are_unset() {
    for sentinel in [EMPTY_NODE, WEIRD_NODE, NO_NODE] {
        assert!(is_unset(&sentinel));
    }
    let registered: B256 =
        "0x71140e023f23f521deb4d89a96aea909bf9c59d3a9ccf7c12afeeef4327e48af".parse().expect("id");
    assert!(!is_unset(&registered));
    assert!(EMPTY_ADDRESS.is_zero());
}
