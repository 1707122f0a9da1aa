//! This module defines [`ChainId`] and the revision-format parsing rules.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A chain identifier, optionally carrying a revision suffix.
///
/// Identifiers of the form `{name}-{n}` where `n` is a decimal integer with no
/// leading zero encode revision `n`. Every other identifier has revision 0.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Debug, Default)]
pub struct ChainId(String);

impl ChainId {
    /// Wraps a raw chain identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is in revision format.
    ///
    /// The suffix after the last `-` must be a non-empty run of ASCII digits
    /// without a leading zero, and the name before it must be non-empty and
    /// must not itself end in `-`.
    #[must_use]
    pub fn is_revision_format(&self) -> bool {
        let Some((name, suffix)) = self.0.rsplit_once('-') else {
            return false;
        };
        !name.is_empty()
            && !name.ends_with('-')
            && !suffix.is_empty()
            && !suffix.starts_with('0')
            && suffix.bytes().all(|b| b.is_ascii_digit())
    }

    /// Extracts the revision number encoded in the identifier.
    ///
    /// Identifiers not in revision format have revision 0, as do identifiers
    /// whose suffix does not fit in a `u64`.
    #[must_use]
    pub fn revision_number(&self) -> u64 {
        if !self.is_revision_format() {
            return 0;
        }
        // unwrap_or covers suffixes that overflow u64
        self.0
            .rsplit_once('-')
            .and_then(|(_, suffix)| suffix.parse().ok())
            .unwrap_or(0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChainId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ChainId;

    #[rstest]
    #[case("testchain-1", 1)]
    #[case("testchain", 0)]
    #[case("testchain-1-2", 2)]
    #[case("gaia-13", 13)]
    #[case("chain-0", 0)]
    #[case("chain-01", 0)]
    #[case("-1", 0)]
    #[case("chain--1", 0)]
    #[case("chain-18446744073709551616", 0)]
    #[case("", 0)]
    fn revision_number_follows_format_rules(#[case] id: &str, #[case] expected: u64) {
        assert_eq!(ChainId::new(id).revision_number(), expected);
    }

    #[rstest]
    #[case("testchain-1", true)]
    #[case("testchain-1-2", true)]
    #[case("testchain", false)]
    #[case("chain-0", false)]
    #[case("chain-01", false)]
    #[case("-1", false)]
    #[case("chain--1", false)]
    #[case("chain-", false)]
    fn is_revision_format_matches_suffix_rules(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(ChainId::new(id).is_revision_format(), expected);
    }

    #[test]
    fn overflowing_suffix_is_revision_format_but_parses_to_zero() {
        let id = ChainId::new("chain-18446744073709551616");
        assert!(id.is_revision_format());
        assert_eq!(id.revision_number(), 0);
    }

    #[test]
    fn display_round_trips_the_raw_identifier() {
        let id: ChainId = "testchain-1".parse().unwrap();
        assert_eq!(id.to_string(), "testchain-1");
        assert_eq!(id.as_str(), "testchain-1");
    }
}
