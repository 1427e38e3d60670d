//! Wire protocol for the Strand ledger client.
//!
//! Everything a caller needs to talk to a ledger node lives here: the
//! JSON-RPC request/response envelope with its process-wide id counter
//! ([`api`]), the size-based fee schedule ([`fee`]), chain construction
//! ([`chain`]), and the binary commit/reveal payload codec ([`commit`]).
//!
//! The codec's output is load-bearing: the commit buffer layout is checked
//! byte-for-byte by the remote node, so composition goes through fixed
//! offsets and big-endian fields, never through a generic serializer.

pub mod api;
pub mod chain;
pub mod commit;
pub mod error;
pub mod fee;

pub use api::{
    next_request_id, ApiRequest, ApiResponse, ChainHeadResponse, CommitAck, RevealAck, RpcError,
};
pub use chain::Chain;
pub use commit::{
    chain_commit_message, compose_chain_commit, compose_chain_reveal, compose_entry_commit,
    compose_entry_reveal, entry_commit_message, CHAIN_COMMIT_LEN, ENTRY_COMMIT_LEN,
};
pub use error::{ProtocolError, ProtocolResult};
pub use fee::{entry_cost, FeeError, FeeSchedule};
