//! Host-side light-client types for the comet consensus host: the state a
//! counterparty keeps of this chain, and this chain's own consensus snapshots.

pub mod chain_id;
pub mod client_state;
pub mod consensus_state;
pub mod height;
