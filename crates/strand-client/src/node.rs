use strand_protocol::{ChainHeadResponse, CommitAck, RevealAck};
use strand_types::{EBlock, Entry, Hash256};

use crate::error::{ClientError, ClientResult};

/// Resolved chain head pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainHead {
    /// Key-Merkle-root of the chain's most recent entry block, if any.
    pub key_mr: Option<Hash256>,
    /// `true` while the chain is known to the submission queue but not yet
    /// finalized into an entry block.
    pub pending: bool,
}

impl TryFrom<ChainHeadResponse> for ChainHead {
    type Error = ClientError;

    fn try_from(resp: ChainHeadResponse) -> Result<Self, Self::Error> {
        let key_mr = if resp.chain_head.is_empty() {
            None
        } else {
            Some(Hash256::from_hex(&resp.chain_head)?)
        };
        Ok(Self {
            key_mr,
            pending: resp.pending,
        })
    }
}

/// Request/response interface to a remote ledger node.
///
/// One round trip per call. Every call blocks its calling thread until the
/// node responds or the transport gives up; implementations never retry and
/// never reinterpret remote errors — both are the caller's policy.
pub trait NodeApi: Send + Sync {
    /// Head pointer and pending flag for a chain.
    fn chain_head(&self, chain_id: &Hash256) -> ClientResult<ChainHead>;

    /// Entry block by its key-Merkle-root.
    fn entry_block(&self, key_mr: &Hash256) -> ClientResult<EBlock>;

    /// Entry by its hash.
    fn entry(&self, hash: &Hash256) -> ClientResult<Entry>;

    /// Submit a hex-encoded commit buffer.
    fn submit_commit(&self, message: &str) -> ClientResult<CommitAck>;

    /// Submit a hex-encoded marshaled entry.
    fn submit_reveal(&self, entry: &str) -> ClientResult<RevealAck>;
}
