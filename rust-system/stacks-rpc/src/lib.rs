//! Client for a Stacks ledger node's HTTP API
//! This lets the gateway run read-only contract calls and broadcast signed transactions

use serde::{Deserialize, Serialize};

/// Body of a read-only contract call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadOnlyCallBody {
    pub sender: String,
    /// Base64-encoded typed arguments, in call order
    pub arguments: Vec<String>,
}

/// Upstream node endpoints
pub mod endpoints {
    /// Read-only contract call, followed by `/{address}/{name}/{function}`
    pub const CALL_READ: &str = "/v2/contracts/call-read";

    /// Raw transaction submission
    pub const TRANSACTIONS: &str = "/v2/transactions";
}

pub mod broadcast;
pub mod client;
pub mod codec;
pub mod contract;
pub mod error;

// Re-exports for convenience
pub use broadcast::{decode_raw_tx, BroadcastResult};
pub use client::{CallRequest, StacksClient};
pub use codec::TypedArgument;
pub use contract::ContractIdentifier;
pub use error::{Result, RpcError};
