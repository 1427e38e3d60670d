//! Ledger node access for the Strand client toolkit.
//!
//! The [`NodeApi`] trait is the entire collaborator boundary to the remote
//! node: five request/response calls, one round trip each. Everything with
//! real logic sits on top of it — the backward-linked chain traversal in
//! [`traverse`] and the commit/reveal submission operations in [`submit`].
//! [`HttpNode`] is the production implementation over blocking JSON-RPC.
//!
//! All calls are synchronous and none retries: callers own timeout and
//! retry policy.

pub mod error;
pub mod http;
pub mod node;
pub mod submit;
pub mod traverse;

pub use error::{ClientError, ClientResult};
pub use http::{HttpNode, NodeConfig};
pub use node::{ChainHead, NodeApi};
pub use submit::{commit_chain, commit_entry, reveal_chain, reveal_entry};
pub use traverse::{chain_exists, entry_block_entries, get_all_chain_entries, get_first_entry};
