#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `hkid-namehash` — identifier derivation
//!
//! Pure functions that turn human-readable names and addresses into the
//! values the on-chain registry works with:
//!
//! - [`label_hash`]: Keccak-256 of a single label's bytes
//! - [`namehash`]: hierarchical hash chaining over a dotted name
//! - [`checksum_address`]: mixed-case checksummed address rendering
//!
//! None of these normalize their input. Case folding and TLD handling
//! belong to `hkid-normalization` and must happen before hashing.
//!
//! ## Example
//! ```
//! use namehash::namehash;
//!
//! let id = namehash("foo.eth");
//! assert_eq!(
//!     id.to_string(),
//!     "0xde9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f"
//! );
//! ```

use sha3::{Digest, Keccak256};
use types::{Address, RecordKey, B256, EMPTY_NODE};

/// Computes the Keccak-256 digest of `data`.
///
/// This is the original Keccak padding used by Ethereum, not NIST SHA3-256.
pub fn keccak256(data: impl AsRef<[u8]>) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(data.as_ref());
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    B256::new(out)
}

/// Hashes a single label. Any byte string is accepted, including the empty one.
pub fn label_hash(label: &str) -> B256 { keccak256(label.as_bytes()) }

/// Computes the namehash of a dotted name.
///
/// Labels are folded from the last (the TLD) to the first:
/// `node = keccak256(node || label_hash(label))`, starting from the
/// all-zero node. The empty name maps to [`EMPTY_NODE`].
pub fn namehash(name: &str) -> B256 {
    if name.is_empty() {
        return EMPTY_NODE;
    }

    // [node @ 0..32, label_hash @ 32..64]
    let mut buffer = [0u8; 64];
    for label in name.rsplit('.') {
        buffer[32..].copy_from_slice(label_hash(label).as_bytes());
        let node = keccak256(buffer);
        buffer[..32].copy_from_slice(node.as_bytes());
    }

    let mut node = [0u8; 32];
    node.copy_from_slice(&buffer[..32]);
    B256::new(node)
}

/// Like [`namehash`], treating a missing name as empty.
pub fn namehash_opt(name: Option<&str>) -> B256 { name.map(namehash).unwrap_or(EMPTY_NODE) }

/// Keccak-256 of `data` rendered as `0x`-prefixed lowercase hex.
pub fn sha3_hex(data: &str) -> String { keccak256(data.as_bytes()).to_hex() }

/// Hash under which the resolver stores a record key.
pub fn key_hash(key: RecordKey) -> B256 { label_hash(key.as_str()) }

/// Renders an address string in checksummed mixed case.
///
/// The input is lowercased and its first `0x` removed; the remaining digits
/// are hashed as text. Digit `i` is uppercased when hex digit `i` of that
/// digest is greater than 7. No validation is performed, so malformed input
/// still yields a (meaningless) string rather than an error.
pub fn checksum_address(address: &str) -> String {
    let lower = address.to_lowercase().replacen("0x", "", 1);
    let digest = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(lower.len() + 2);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        if digest_nibble(&digest, i) > 7 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Checksummed rendering of a parsed [`Address`].
pub fn checksum(address: &Address) -> String { checksum_address(&address.to_hex()) }

/// Hex digit `index` of `digest`; positions past the digest count as zero.
fn digest_nibble(digest: &B256, index: usize) -> u8 {
    match digest.as_bytes().get(index / 2) {
        Some(byte) if index % 2 == 0 => byte >> 4,
        Some(byte) => byte & 0x0f,
        None => 0,
    }
}
