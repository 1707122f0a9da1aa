//! The crate that produces this chain's own consensus snapshots and validates
//! counterparty-held light-client records of this chain.
#![deny(missing_docs, clippy::nursery, clippy::pedantic, warnings)]

pub mod error;
pub mod host;
pub mod ledger;

pub use error::ConsensusHostError;
pub use host::{ChainContext, ConsensusHost};
pub use ledger::{HistoricalInfo, HistoricalLedgerView};
