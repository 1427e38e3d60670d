use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use strand_protocol::api::{
    methods, AddressParams, ApiRequest, ApiResponse, BalanceResponse, ChainHeadParams,
    ChainHeadResponse, EntryParams, HashParams, HeightsResponse, KeyMrParams, MessageParams,
    RateResponse,
};
use strand_protocol::{CommitAck, RevealAck};
use strand_types::{EBlock, Entry, Hash256};

use crate::error::{ClientError, ClientResult};
use crate::node::{ChainHead, NodeApi};

/// Connection settings for a ledger node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Full URL of the node's JSON-RPC endpoint.
    pub endpoint: String,
    /// Wall-clock limit for one round trip.
    pub timeout: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8088/v2".into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Blocking JSON-RPC client for a remote ledger node.
pub struct HttpNode {
    config: NodeConfig,
    client: Client,
}

impl HttpNode {
    pub fn new(config: NodeConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Client for an endpoint URL with default settings otherwise.
    pub fn from_endpoint(endpoint: impl Into<String>) -> ClientResult<Self> {
        Self::new(NodeConfig {
            endpoint: endpoint.into(),
            ..NodeConfig::default()
        })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    fn call<T: DeserializeOwned>(&self, method: &str, params: Option<Value>) -> ClientResult<T> {
        let req = ApiRequest::new(method, params);
        debug!(method, id = req.id, "node request");
        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&req)
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        // The node reports failures in the JSON-RPC error member, also on
        // non-2xx statuses, so the body is parsed unconditionally.
        let api: ApiResponse = resp
            .json()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let result = api.into_result()?;
        serde_json::from_value(result).map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn params<P: Serialize>(params: &P) -> ClientResult<Option<Value>> {
        serde_json::to_value(params)
            .map(Some)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    // ---- Supplemental read API ----

    /// Balance of an entry-credit address, in credits.
    pub fn entry_credit_balance(&self, address: &str) -> ClientResult<i64> {
        let resp: BalanceResponse = self.call(
            methods::ENTRY_CREDIT_BALANCE,
            Self::params(&AddressParams {
                address: address.into(),
            })?,
        )?;
        Ok(resp.balance)
    }

    /// Current price of one entry credit, in base currency units.
    pub fn entry_credit_rate(&self) -> ClientResult<u64> {
        let resp: RateResponse = self.call(methods::ENTRY_CREDIT_RATE, None)?;
        Ok(resp.rate)
    }

    /// Ledger heights as seen by the node.
    pub fn heights(&self) -> ClientResult<HeightsResponse> {
        self.call(methods::HEIGHTS, None)
    }
}

impl NodeApi for HttpNode {
    fn chain_head(&self, chain_id: &Hash256) -> ClientResult<ChainHead> {
        let resp: ChainHeadResponse = self.call(
            methods::CHAIN_HEAD,
            Self::params(&ChainHeadParams {
                chain_id: chain_id.to_hex(),
            })?,
        )?;
        ChainHead::try_from(resp)
    }

    fn entry_block(&self, key_mr: &Hash256) -> ClientResult<EBlock> {
        self.call(
            methods::ENTRY_BLOCK,
            Self::params(&KeyMrParams {
                key_mr: key_mr.to_hex(),
            })?,
        )
    }

    fn entry(&self, hash: &Hash256) -> ClientResult<Entry> {
        self.call(
            methods::ENTRY,
            Self::params(&HashParams {
                hash: hash.to_hex(),
            })?,
        )
    }

    fn submit_commit(&self, message: &str) -> ClientResult<CommitAck> {
        self.call(
            methods::SUBMIT_COMMIT,
            Self::params(&MessageParams {
                message: message.into(),
            })?,
        )
    }

    fn submit_reveal(&self, entry: &str) -> ClientResult<RevealAck> {
        self.call(
            methods::SUBMIT_REVEAL,
            Self::params(&EntryParams {
                entry: entry.into(),
            })?,
        )
    }
}
