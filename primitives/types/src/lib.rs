#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core value types for the hkid naming layer.
//!
//! This crate defines the fixed-width values exchanged between the hash
//! engine, the dispatcher and the contract bindings: 256-bit words
//! ([`B256`], used for name identifiers and label hashes), 160-bit
//! [`Address`]es, transaction references, the allow-listed resolver
//! [`RecordKey`] vocabulary and the distinguished sentinel constants the
//! registry uses to mark unset entries.
//!
//! Everything here is plain data: no hashing and no I/O.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed-width byte values (`B256`, `Address`) with `0x`-hex rendering.
pub mod bytes;
/// Allow-listed resolver record keys.
pub mod record_key;
/// Sentinel identifiers and addresses used by the registry.
pub mod sentinel;

pub use bytes::{Address, B256};
pub use record_key::RecordKey;
pub use sentinel::{is_unset, EMPTY_ADDRESS, EMPTY_NODE, NO_NODE, WEIRD_NODE};

/// A name identifier (the namehash of a dotted name).
pub type Identifier = B256;

/// Native-currency amount in wei.
///
/// Prices returned by the controller are 256-bit words on chain; values
/// that do not fit in 128 bits are rejected at decode time.
pub type Amount = u128;

/// Errors raised when parsing values from their string forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// The input contained a non-hex character.
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    /// The decoded value had the wrong number of bytes.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Number of bytes the type requires
        expected: usize,
        /// Number of bytes found in the input
        actual: usize,
    },

    /// The record key is not part of the allow-listed vocabulary.
    #[error("Unknown record key: {0}")]
    UnknownRecordKey(String),
}

/// Reference to a submitted transaction, as returned by the ledger.
///
/// The value is kept exactly as the ledger reported it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(pub String);

impl TxHash {
    /// Returns the transaction reference as a string slice.
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<String> for TxHash {
    fn from(s: String) -> Self { Self(s) }
}
