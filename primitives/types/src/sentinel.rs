//! Distinguished constants the registry uses for absent or degenerate entries.

use crate::{Address, B256};

/// Returned in place of an owner when a name is not registered.
pub const EMPTY_ADDRESS: Address = Address::ZERO;

/// Identifier of the empty name; also marks an unset identifier.
pub const EMPTY_NODE: B256 = B256::ZERO;

/// `0x00…01`, marks a degenerate registry entry.
pub const WEIRD_NODE: B256 = {
    let mut bytes = [0u8; 32];
    bytes[31] = 0x01;
    B256(bytes)
};

/// `0x00…1234`, marks "no node".
pub const NO_NODE: B256 = {
    let mut bytes = [0u8; 32];
    bytes[30] = 0x12;
    bytes[31] = 0x34;
    B256(bytes)
};

/// Returns `true` if `id` is one of the unset-identifier sentinels.
pub fn is_unset(id: &B256) -> bool { *id == EMPTY_NODE || *id == WEIRD_NODE || *id == NO_NODE }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_bit_for_bit() {
        assert_eq!(EMPTY_ADDRESS.to_string(), "0x0000000000000000000000000000000000000000");
        assert_eq!(
            EMPTY_NODE.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            WEIRD_NODE.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(
            NO_NODE.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000001234"
        );
    }

    #[test]
    fn test_is_unset() {
        assert!(is_unset(&EMPTY_NODE));
        assert!(is_unset(&WEIRD_NODE));
        assert!(is_unset(&NO_NODE));
        assert!(!is_unset(&B256::new([0xff; 32])));
    }
}
