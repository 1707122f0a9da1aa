//! This module defines the consensus snapshot the host produces for its own
//! chain.

use serde::{Deserialize, Serialize};

/// A commitment to the application state at some height.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct CommitmentRoot(#[serde(with = "comet_host_utils::base64")] Vec<u8>);

impl CommitmentRoot {
    /// Builds a root from the raw app hash bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Returns the root as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the root, returning the raw bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for CommitmentRoot {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// A snapshot of this chain's consensus at a single height.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct ConsensusState {
    /// The block time in nanoseconds since the unix epoch
    pub timestamp: u64,
    /// The commitment to the application state
    pub root: CommitmentRoot,
    /// The hash of the validator set that signs the next block
    #[serde(with = "comet_host_utils::base64")]
    pub next_validators_hash: Vec<u8>,
}
