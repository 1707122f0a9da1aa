//! This module defines [`ConsensusHost`] and its two operations: building the
//! chain's own consensus snapshot and validating a counterparty-held client
//! record of this chain.

use comet_client_types::chain_id::ChainId;
use comet_client_types::client_state::{AnyClientState, COMET_CLIENT_TYPE};
use comet_client_types::consensus_state::{CommitmentRoot, ConsensusState};
use comet_client_types::height::Height;
use comet_host_utils::ensure;
use tracing::debug;

use crate::error::ConsensusHostError;
use crate::ledger::HistoricalLedgerView;

/// The slice of the chain's execution context the consensus host reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainContext {
    chain_id: ChainId,
    block_height: u64,
}

impl ChainContext {
    /// Creates a context for the given chain at the given block height.
    #[must_use]
    pub const fn new(chain_id: ChainId, block_height: u64) -> Self {
        Self {
            chain_id,
            block_height,
        }
    }

    /// The identifier of the chain being executed.
    #[must_use]
    pub const fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    /// The height of the block currently being executed.
    #[must_use]
    pub const fn block_height(&self) -> u64 {
        self.block_height
    }
}

/// Produces and validates self-chain consensus information, backed by a
/// [`HistoricalLedgerView`].
#[derive(Clone, Debug)]
pub struct ConsensusHost<L> {
    ledger: L,
}

impl<L: HistoricalLedgerView> ConsensusHost<L> {
    /// Creates a consensus host backed by the given ledger view.
    #[must_use]
    pub const fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// Builds this chain's consensus snapshot at `height`.
    ///
    /// # Errors
    /// Returns an error if the height cannot identify a block on this chain,
    /// belongs to a different revision, or has no recorded header.
    pub fn self_consensus_state(
        &self,
        ctx: &ChainContext,
        height: Height,
    ) -> Result<ConsensusState, ConsensusHostError> {
        ensure!(
            height.revision_height != 0,
            ConsensusHostError::InvalidHeight(height)
        );

        let self_revision = ctx.chain_id().revision_number();
        ensure!(
            height.revision_number == self_revision,
            ConsensusHostError::RevisionMismatch {
                expected: self_revision,
                actual: height.revision_number,
            }
        );

        let info = self
            .ledger
            .historical_info(height.revision_height)
            .map_err(|e| ConsensusHostError::HistoricalInfoNotFound {
                height: height.revision_height,
                reason: e.to_string(),
            })?;

        let timestamp = info.time.unix_timestamp_nanos().try_into().map_err(|_| {
            ConsensusHostError::HeaderTimeOutOfRange {
                height: height.revision_height,
            }
        })?;

        let consensus_state = ConsensusState {
            timestamp,
            root: CommitmentRoot::from_bytes(&info.app_hash),
            next_validators_hash: info.next_validators_hash,
        };

        debug!(%height, "built self consensus state");

        Ok(consensus_state)
    }

    /// Validates a counterparty-held client record of this chain against the
    /// chain's live state.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    ///
    /// # Errors
    /// Returns an error if the record is frozen, tracks a different chain or
    /// revision, claims a height the chain has not reached, or carries staking
    /// periods inconsistent with the chain's.
    pub fn validate_self_client(
        &self,
        ctx: &ChainContext,
        client_state: &AnyClientState,
    ) -> Result<(), ConsensusHostError> {
        let AnyClientState::Comet(client_state) = client_state else {
            return Err(ConsensusHostError::UnsupportedClientType {
                expected: COMET_CLIENT_TYPE,
                found: client_state.client_type(),
            });
        };

        ensure!(
            !client_state.is_frozen(),
            ConsensusHostError::ClientFrozen(client_state.frozen_height)
        );

        ensure!(
            client_state.chain_id == *ctx.chain_id(),
            ConsensusHostError::ChainIdMismatch {
                expected: ctx.chain_id().to_string(),
                found: client_state.chain_id.to_string(),
            }
        );

        let self_revision = ctx.chain_id().revision_number();
        ensure!(
            client_state.latest_height.revision_number == self_revision,
            ConsensusHostError::RevisionMismatch {
                expected: self_revision,
                actual: client_state.latest_height.revision_number,
            }
        );

        let chain_height = Height::new(self_revision, ctx.block_height());
        ensure!(
            client_state.latest_height < chain_height,
            ConsensusHostError::ClientAheadOfChain {
                latest_height: client_state.latest_height,
                chain_height,
            }
        );

        let unbonding_period = self
            .ledger
            .unbonding_period()
            .map_err(|e| ConsensusHostError::UnbondingQueryFailed(e.to_string()))?;
        ensure!(
            unbonding_period.as_nanos() == u128::from(client_state.unbonding_period),
            ConsensusHostError::UnbondingPeriodMismatch {
                expected_ns: unbonding_period.as_nanos(),
                found_ns: client_state.unbonding_period,
            }
        );

        ensure!(
            client_state.unbonding_period >= client_state.trusting_period,
            ConsensusHostError::TrustingPeriodTooLong {
                unbonding_period: client_state.unbonding_period,
                trusting_period: client_state.trusting_period,
            }
        );

        debug!(
            chain_id = %ctx.chain_id(),
            latest_height = %client_state.latest_height,
            "validated self client"
        );

        Ok(())
    }
}
