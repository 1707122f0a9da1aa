//! Common test utilities and fixtures for consensus host tests

use std::collections::BTreeMap;
use std::time::Duration;

use comet_client_types::chain_id::ChainId;
use comet_client_types::client_state::ClientState;
use comet_client_types::height::Height;
use comet_consensus_host::{ChainContext, ConsensusHost, HistoricalInfo, HistoricalLedgerView};

pub const CHAIN_ID: &str = "testchain-1";
pub const CHAIN_HEIGHT: u64 = 100;
pub const UNBONDING_PERIOD_NS: u64 = 1_000;
pub const TRUSTING_PERIOD_NS: u64 = 500;

/// An in-memory ledger view over a fixed set of recorded headers.
#[derive(Clone, Default)]
pub struct MockLedger {
    headers: BTreeMap<u64, HistoricalInfo>,
    unbonding_period: Option<Duration>,
}

impl MockLedger {
    pub fn with_header(mut self, height: u64, info: HistoricalInfo) -> Self {
        self.headers.insert(height, info);
        self
    }

    pub fn with_unbonding_period(mut self, period: Duration) -> Self {
        self.unbonding_period = Some(period);
        self
    }
}

impl HistoricalLedgerView for MockLedger {
    type Error = String;

    fn historical_info(&self, height: u64) -> Result<HistoricalInfo, Self::Error> {
        self.headers
            .get(&height)
            .cloned()
            .ok_or_else(|| format!("no header at height {height}"))
    }

    fn unbonding_period(&self) -> Result<Duration, Self::Error> {
        self.unbonding_period
            .ok_or_else(|| "staking params unavailable".to_string())
    }
}

pub fn header_at(height: u64) -> HistoricalInfo {
    HistoricalInfo {
        time: tendermint::Time::from_unix_timestamp(1_700_000_000 + height as i64, 0)
            .expect("valid header time"),
        app_hash: format!("app-hash-{height}").into_bytes(),
        next_validators_hash: format!("next-valset-{height}").into_bytes(),
    }
}

pub fn test_context() -> ChainContext {
    ChainContext::new(ChainId::new(CHAIN_ID), CHAIN_HEIGHT)
}

/// A host over a ledger that has recorded height 99 of `testchain-1` and knows
/// its unbonding period.
pub fn test_host() -> ConsensusHost<MockLedger> {
    let ledger = MockLedger::default()
        .with_header(99, header_at(99))
        .with_unbonding_period(Duration::from_nanos(UNBONDING_PERIOD_NS));
    ConsensusHost::new(ledger)
}

/// A record of this chain that passes every validation check against
/// [`test_context`] and [`test_host`].
pub fn valid_client_state() -> ClientState {
    ClientState {
        chain_id: ChainId::new(CHAIN_ID),
        latest_height: Height::new(1, 99),
        frozen_height: Height::default(),
        unbonding_period: UNBONDING_PERIOD_NS,
        trusting_period: TRUSTING_PERIOD_NS,
    }
}
