use namehash::*;
use types::{Address, B256};

fn hex32(s: &str) -> B256 { s.parse().expect("valid 32-byte hex") }

fn concat(node: &B256, label: &str) -> B256 {
    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(node.as_bytes());
    buf.extend_from_slice(label_hash(label).as_bytes());
    keccak256(buf)
}

#[test]
fn test_namehash_known_vectors() {
    for (name, expected) in [
        ("", "0x0000000000000000000000000000000000000000000000000000000000000000"),
        ("eth", "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"),
        ("foo.eth", "0xde9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f"),
        ("hk", "0xfbfaaca0d43d165b90dd749909af186e10593005ee1b3f11174680e1cbc37585"),
        ("alice.hk", "0x71140e023f23f521deb4d89a96aea909bf9c59d3a9ccf7c12afeeef4327e48af"),
        ("a.b.hk", "0xd48f90aa748d8ab4924f5af41b82250da96835ff15fef8b67fe06b0b0be378ec"),
    ] {
        assert_eq!(namehash(name), hex32(expected), "namehash({:?})", name);
    }
}

#[test]
fn test_namehash_chains_from_tld() {
    let expected = concat(&concat(&concat(&B256::ZERO, "hk"), "b"), "a");
    assert_eq!(namehash("a.b.hk"), expected);
}

#[test]
fn test_namehash_is_order_sensitive() {
    assert_ne!(namehash("a.b"), namehash("b.a"));
    assert_eq!(
        namehash("a.b"),
        hex32("0xa57dcb7e802753630ec035bae538ca332465791509b1375525fe8b3b0bada7ef")
    );
    assert_eq!(
        namehash("b.a"),
        hex32("0x74d38d8fd760fa0c7f9331740912657f67b01c89bb76a6a60e5be2e2c20b4267")
    );
}

#[test]
fn test_namehash_does_not_normalize() {
    assert_ne!(namehash("alice.hk"), namehash("Alice.hk"));
    assert_ne!(namehash("alice.hk"), namehash(" alice.hk"));
    assert_ne!(namehash("alice.hk"), namehash("alice.hk "));
    assert_eq!(namehash("alice.hk"), namehash("alice.hk"));
}

#[test]
fn test_namehash_subdomain_scoped_under_parent() {
    let parent = namehash("alice.hk");
    assert_eq!(namehash("pay.alice.hk"), concat(&parent, "pay"));
}

#[test]
fn test_checksum_address_vectors() {
    for expected in [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        "0x52908400098527886E0F7030069857D2E4169EE7",
        "0xde709f2102306220921060314715629080e2fb77",
        "0x6248cF19321a354a970b99e811C979A18b4e6446",
        "0xc13cA34ed99CA845001798aEeDd868A30D839D7a",
    ] {
        assert_eq!(checksum_address(&expected.to_lowercase()), expected);
        assert_eq!(checksum_address(&expected.to_uppercase()), expected);
        assert_eq!(checksum_address(expected.trim_start_matches("0x")), expected);
    }
}

#[test]
fn test_checksum_address_is_idempotent() {
    let once = checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
    assert_eq!(checksum_address(&once), once);
    assert_eq!(checksum_address(&once), checksum_address(&once));

    let digits_only = "0x1234567890123456789012345678901234567890";
    assert_eq!(checksum_address(digits_only).to_lowercase(), digits_only);
}

#[test]
fn test_checksum_of_parsed_address() {
    let addr: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().expect("address");
    assert_eq!(checksum(&addr), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
}
