//! Fixed-width byte values rendered as `0x`-prefixed lowercase hex.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::TypesError;

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Number of bytes in this value.
            pub const LEN: usize = $len;

            /// The all-zero value.
            pub const ZERO: Self = Self([0u8; $len]);

            /// Wraps raw bytes.
            pub const fn new(bytes: [u8; $len]) -> Self { Self(bytes) }

            /// Returns the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] { &self.0 }

            /// Returns `true` when every byte is zero.
            pub fn is_zero(&self) -> bool { self.0.iter().all(|b| *b == 0) }

            /// Builds a value from a slice of exactly the right length.
            pub fn from_slice(slice: &[u8]) -> Result<Self, TypesError> {
                let bytes: [u8; $len] = slice.try_into().map_err(|_| TypesError::InvalidLength {
                    expected: $len,
                    actual: slice.len(),
                })?;
                Ok(Self(bytes))
            }

            /// Renders the value as `0x` followed by lowercase hex digits.
            pub fn to_hex(&self) -> String { format!("0x{}", hex::encode(self.0)) }
        }

        impl FromStr for $name {
            type Err = TypesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
                let decoded =
                    hex::decode(digits).map_err(|e| TypesError::InvalidHex(format!("{}: {}", s, e)))?;
                Self::from_slice(&decoded)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self { Self(bytes) }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] { &self.0 }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

fixed_bytes!(
    /// A 256-bit word: name identifiers, label hashes and record-key hashes.
    B256,
    32
);

fixed_bytes!(
    /// A 160-bit account or contract address.
    ///
    /// `Display` renders the all-lowercase form; the checksummed form is
    /// produced by the hash engine.
    Address,
    20
);

impl Address {
    /// Left-pads the address into a 32-byte word.
    pub fn to_word(&self) -> B256 {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        B256(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b256_parse_and_display() {
        let hex_str = "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae";
        let value: B256 = hex_str.parse().expect("valid word");
        assert_eq!(value.to_string(), hex_str);
        assert_eq!(value.0[0], 0x93);

        let no_prefix: B256 = hex_str.trim_start_matches("0x").parse().expect("valid word");
        assert_eq!(no_prefix, value);

        let upper: B256 = hex_str.to_uppercase().replacen("0X", "0x", 1).parse().expect("upper");
        assert_eq!(upper, value);
    }

    #[test]
    fn test_b256_rejects_bad_input() {
        assert_eq!(
            "0x1234".parse::<B256>(),
            Err(TypesError::InvalidLength { expected: 32, actual: 2 })
        );
        assert!(matches!("0xzz".parse::<B256>(), Err(TypesError::InvalidHex(_))));
    }

    #[test]
    fn test_address_roundtrip_lowercases() {
        let addr: Address =
            "0x6248cF19321a354a970b99e811C979A18b4e6446".parse().expect("valid address");
        assert_eq!(addr.to_string(), "0x6248cf19321a354a970b99e811c979a18b4e6446");
        assert!(!addr.is_zero());
        assert!(Address::ZERO.is_zero());
    }

    #[test]
    fn test_address_to_word() {
        let addr = Address::new([0xab; 20]);
        let word = addr.to_word();
        assert!(word.0[..12].iter().all(|b| *b == 0));
        assert_eq!(&word.0[12..], &[0xab; 20]);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let addr = Address::new([0x11; 20]);
        let json = serde_json::to_string(&addr).expect("serialize");
        assert_eq!(json, "\"0x1111111111111111111111111111111111111111\"");
        let back: Address = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, addr);

        let err = serde_json::from_str::<Address>("\"0x11\"");
        assert!(err.is_err());
    }
}
