#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Name normalization for the `.hk` namespace.
//!
//! These helpers canonicalize a name before it is hashed. They are plain
//! string transformations and never validate the label charset.
//!
//! TLD stripping removes the `.hk` literal wherever it occurs in the input,
//! not only at the end: `remove_tld("a.hk.b") == "a.b"`. The registry has
//! always been fed names stripped this way, so the behavior is kept as is.

/// The top-level domain served by the registry.
pub const TLD: &str = "hk";

/// The TLD with its leading separator, as it appears in a full name.
pub const TLD_SUFFIX: &str = ".hk";

/// Label separator.
pub const SEPARATOR: char = '.';

/// Removes every occurrence of [`TLD_SUFFIX`] from `name`.
pub fn remove_tld(name: &str) -> String { name.replace(TLD_SUFFIX, "") }

/// Ensures `name` ends with exactly one [`TLD_SUFFIX`].
///
/// Existing occurrences are stripped first (see [`remove_tld`]), then a
/// single suffix is appended.
pub fn suffix_tld(name: &str) -> String {
    let mut out = remove_tld(name);
    out.push_str(TLD_SUFFIX);
    out
}

/// Splits a name into labels, most-specific first.
///
/// Empty segments are preserved so that [`join_labels`] round-trips.
pub fn labels(name: &str) -> Vec<&str> { name.split(SEPARATOR).collect() }

/// Joins labels back into a dotted name.
pub fn join_labels<S: AsRef<str>>(labels: &[S]) -> String {
    labels.iter().map(|l| l.as_ref()).collect::<Vec<_>>().join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_tld() {
        assert_eq!(suffix_tld("foo"), "foo.hk");
        assert_eq!(suffix_tld("foo.hk"), "foo.hk");
        assert_eq!(suffix_tld("foo.hk.hk"), "foo.hk");
        assert_eq!(suffix_tld(""), ".hk");
        assert_eq!(suffix_tld("pay.alice"), "pay.alice.hk");
    }

    #[test]
    fn test_remove_tld_strips_substring_anywhere() {
        assert_eq!(remove_tld("a.hk.b"), "a.b");
        assert_eq!(remove_tld("alice.hk"), "alice");
        assert_eq!(remove_tld("alice"), "alice");
        // Not suffix-anchored: a label starting with "hk" loses its prefix too.
        assert_eq!(remove_tld("a.hkx"), "ax");
    }

    #[test]
    fn test_no_case_folding() {
        assert_eq!(remove_tld("alice.HK"), "alice.HK");
        assert_eq!(suffix_tld("Alice"), "Alice.hk");
    }

    #[test]
    fn test_labels_roundtrip() {
        for name in ["a.b.hk", "alice", "", "a..b", ".hk", "trailing."] {
            assert_eq!(join_labels(&labels(name)), name);
        }
        assert_eq!(labels("pay.alice.hk"), vec!["pay", "alice", "hk"]);
    }
}
