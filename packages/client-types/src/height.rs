//! This module defines [`Height`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// A block height paired with the revision it belongs to.
///
/// Heights are totally ordered: the revision number is compared first and the
/// revision height breaks ties within a revision.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug, Default,
)]
pub struct Height {
    /// The revision the chain was on at this height
    pub revision_number: u64,
    /// The block height within the revision
    pub revision_height: u64,
}

impl Height {
    /// Creates a new height from a revision pair.
    #[must_use]
    pub const fn new(revision_number: u64, revision_height: u64) -> Self {
        Self {
            revision_number,
            revision_height,
        }
    }

    /// Whether both components are zero.
    ///
    /// The zero height doubles as the "not frozen" sentinel on client states.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.revision_number == 0 && self.revision_height == 0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}
