//! This module defines the client state a counterparty chain stores for this
//! chain, and the closed set of client types the host accepts.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::chain_id::ChainId;
use crate::height::Height;

/// The client type identifier for the native comet light client.
pub const COMET_CLIENT_TYPE: &str = "11-comet";

/// The client type identifier for wasm-wrapped light clients.
pub const WASM_CLIENT_TYPE: &str = "08-wasm";

/// The state a counterparty light client keeps of this chain.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct ClientState {
    /// The identifier of the chain this client tracks
    #[serde_as(as = "DisplayFromStr")]
    pub chain_id: ChainId,
    /// The most recent height the client has been updated to
    pub latest_height: Height,
    /// The height at which the client was frozen, zero if not frozen
    pub frozen_height: Height,
    /// The staking unbonding period, in nanoseconds
    pub unbonding_period: u64,
    /// How long a consensus snapshot stays trusted, in nanoseconds
    pub trusting_period: u64,
}

impl ClientState {
    /// Whether the client has been frozen due to misbehaviour.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        !self.frozen_height.is_zero()
    }
}

/// A client state wrapped for execution inside a wasm host.
///
/// The inner client state is opaque to this chain and carried as raw bytes.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct WasmClientState {
    /// The checksum of the wasm code that interprets `data`
    #[serde(with = "comet_host_utils::base64")]
    pub checksum: Vec<u8>,
    /// The serialized inner client state
    #[serde(with = "comet_host_utils::base64")]
    pub data: Vec<u8>,
    /// The most recent height the client has been updated to
    pub latest_height: Height,
}

/// The closed set of client states the host knows how to handle.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(tag = "client_type")]
pub enum AnyClientState {
    /// A native comet client state
    #[serde(rename = "11-comet")]
    Comet(ClientState),
    /// A wasm-wrapped client state
    #[serde(rename = "08-wasm")]
    Wasm(WasmClientState),
}

impl AnyClientState {
    /// Returns the client type identifier for this state.
    #[must_use]
    pub const fn client_type(&self) -> &'static str {
        match self {
            Self::Comet(_) => COMET_CLIENT_TYPE,
            Self::Wasm(_) => WASM_CLIENT_TYPE,
        }
    }
}
