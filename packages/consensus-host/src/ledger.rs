//! This module defines the read-only view the host takes of the chain's
//! historical ledger state.

use core::fmt::Display;
use std::time::Duration;

/// A header snapshot retrieved from the chain's historical store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoricalInfo {
    /// The header wall-clock time
    pub time: tendermint::Time,
    /// The application state hash committed by the header
    pub app_hash: Vec<u8>,
    /// The hash of the validator set that signs the next block
    pub next_validators_hash: Vec<u8>,
}

/// Read-only access to the chain's historical headers and staking parameters.
///
/// Implementations are injected into
/// [`ConsensusHost`](crate::host::ConsensusHost) by value; the host never
/// reaches for global state.
pub trait HistoricalLedgerView {
    /// The error type returned by the underlying store.
    type Error: Display;

    /// Fetches the header snapshot recorded at `height`.
    ///
    /// # Errors
    /// Returns an error if no header is recorded at `height`.
    fn historical_info(&self, height: u64) -> Result<HistoricalInfo, Self::Error>;

    /// Fetches the current staking unbonding period.
    ///
    /// # Errors
    /// Returns an error if the staking parameters cannot be read.
    fn unbonding_period(&self) -> Result<Duration, Self::Error>;
}
