use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use strand_types::Hash256;

/// JSON-RPC protocol version carried by every request.
pub const JSON_RPC_VERSION: &str = "2.0";

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Next request identifier for request/response correlation.
///
/// Process-wide, safe for concurrent callers. Values are unique within a
/// session but not gap-free.
pub fn next_request_id() -> u64 {
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Method names of the node interface.
pub mod methods {
    pub const CHAIN_HEAD: &str = "chain-head";
    pub const ENTRY_BLOCK: &str = "entry-block";
    pub const ENTRY: &str = "entry";
    pub const SUBMIT_COMMIT: &str = "submit-commit";
    pub const SUBMIT_REVEAL: &str = "submit-reveal";
    pub const ENTRY_CREDIT_BALANCE: &str = "entry-credit-balance";
    pub const ENTRY_CREDIT_RATE: &str = "entry-credit-rate";
    pub const HEIGHTS: &str = "heights";
}

/// A JSON-RPC request to the ledger node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl ApiRequest {
    /// Build a request with a fresh correlation id.
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.into(),
            id: next_request_id(),
            method: method.into(),
            params,
        }
    }
}

/// A JSON-RPC response from the ledger node.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

impl ApiResponse {
    /// The result value, or the node's error propagated verbatim.
    pub fn into_result(self) -> Result<Value, RpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

/// A structured error reported by the remote node.
///
/// Propagated to callers exactly as received, never reinterpreted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("node error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// ---- Request parameter shapes ----

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainHeadParams {
    #[serde(rename = "chainid")]
    pub chain_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyMrParams {
    #[serde(rename = "keymr")]
    pub key_mr: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HashParams {
    pub hash: String,
}

/// Hex-encoded commit buffer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageParams {
    pub message: String,
}

/// Hex-encoded marshaled entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntryParams {
    pub entry: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddressParams {
    pub address: String,
}

// ---- Response shapes ----

/// Head lookup result. An empty `chain_head` together with the pending flag
/// means the chain is committed but not yet in any entry block.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainHeadResponse {
    #[serde(rename = "chainhead")]
    pub chain_head: String,
    #[serde(rename = "chaininprocesslist")]
    pub pending: bool,
}

/// Acknowledgment of an accepted commit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommitAck {
    pub message: String,
    #[serde(rename = "txid")]
    pub tx_id: String,
}

/// Acknowledgment of an accepted reveal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealAck {
    pub message: String,
    #[serde(rename = "entryhash")]
    pub entry_hash: Hash256,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateResponse {
    pub rate: u64,
}

/// Ledger heights as reported by the node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeightsResponse {
    #[serde(rename = "directoryblockheight")]
    pub directory_block_height: u64,
    #[serde(rename = "leaderheight")]
    pub leader_height: u64,
    #[serde(rename = "entryblockheight")]
    pub entry_block_height: u64,
    #[serde(rename = "entryheight")]
    pub entry_height: u64,
}
