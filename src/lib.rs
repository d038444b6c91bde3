// SPDX-License-Identifier: CC0-1.0

//! hkid umbrella crate.
//!
//! This crate primarily serves as the workspace root and re-exports the
//! library crates a consumer of the naming layer needs.
//!
//! All functional code lives in the workspace member crates under
//! `primitives`, `adapters`, `backends`, `core` and `cli`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use {adapters, dispatcher, namehash, normalization, types};

/// Miscellaneous metadata about the hkid workspace.
pub mod hkid_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(hkid_meta::VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports_agree() {
        let full = normalization::suffix_tld("alice");
        assert_eq!(namehash::namehash(&full), namehash::namehash("alice.hk"));
        assert!(types::is_unset(&namehash::namehash("")));
    }
}
