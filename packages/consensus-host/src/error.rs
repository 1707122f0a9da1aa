//! This module defines [`ConsensusHostError`].

use comet_client_types::height::Height;
use thiserror::Error;

/// The error type returned by consensus host operations.
///
/// Every failure is terminal for the caller; none of these conditions clear on
/// retry within the same block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsensusHostError {
    /// height cannot identify a block on this chain
    #[error("height {0} cannot identify a block on this chain")]
    InvalidHeight(Height),

    /// revision number does not match the chain's revision
    #[error("revision mismatch (expected: {expected}, actual: {actual})")]
    RevisionMismatch {
        /// the revision the chain identifier encodes
        expected: u64,
        /// the revision found on the input
        actual: u64,
    },

    /// no header is recorded at the requested height
    #[error("no historical info found at height {height}: {reason}")]
    HistoricalInfoNotFound {
        /// the requested block height
        height: u64,
        /// the ledger's failure message
        reason: String,
    },

    /// header time predates the unix epoch
    #[error("header time at height {height} is before the unix epoch")]
    HeaderTimeOutOfRange {
        /// the block height whose header time is out of range
        height: u64,
    },

    /// client state is not a type this chain can validate against itself
    #[error("unsupported client type (expected: {expected}, found: {found})")]
    UnsupportedClientType {
        /// the client type the host requires
        expected: &'static str,
        /// the client type that was submitted
        found: &'static str,
    },

    /// client has been frozen due to misbehaviour
    #[error("client is frozen at height {0}")]
    ClientFrozen(Height),

    /// client tracks a different chain identifier
    #[error("chain id mismatch (expected: {expected}, found: {found})")]
    ChainIdMismatch {
        /// this chain's identifier
        expected: String,
        /// the identifier on the client state
        found: String,
    },

    /// client claims a height at or beyond the chain's current height
    #[error("client latest height {latest_height} must be less than chain height {chain_height}")]
    ClientAheadOfChain {
        /// the latest height on the client state
        latest_height: Height,
        /// the chain's current height
        chain_height: Height,
    },

    /// the staking unbonding period could not be read
    #[error("failed to query the unbonding period: {0}")]
    UnbondingQueryFailed(String),

    /// client unbonding period differs from the chain's
    #[error("unbonding period mismatch (expected: {expected_ns}ns, found: {found_ns}ns)")]
    UnbondingPeriodMismatch {
        /// the chain's unbonding period in nanoseconds
        expected_ns: u128,
        /// the unbonding period on the client state in nanoseconds
        found_ns: u64,
    },

    /// trusting period exceeds the unbonding period
    #[error(
        "trusting period {trusting_period}ns must not exceed the unbonding period \
         {unbonding_period}ns"
    )]
    TrustingPeriodTooLong {
        /// the unbonding period on the client state in nanoseconds
        unbonding_period: u64,
        /// the trusting period on the client state in nanoseconds
        trusting_period: u64,
    },
}
