use thiserror::Error;

use strand_protocol::{ProtocolError, RpcError};
use strand_types::{Entry, TypeError};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The chain is committed but not yet finalized into any entry block.
    /// Distinguished from not-found so callers can retry later instead of
    /// treating the chain as nonexistent.
    #[error("chain not yet included in an entry block")]
    ChainPending,

    #[error("chain {0} has no head and is not pending")]
    MissingChainHead(String),

    #[error("entry block {0} lists no entries")]
    EmptyEntryBlock(String),

    /// Error reported by the remote node, propagated verbatim.
    #[error(transparent)]
    Node(#[from] RpcError),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("response decode error: {0}")]
    Decode(String),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A mid-walk fetch failed. Everything gathered before the failure is
    /// preserved alongside the cause for best-effort use.
    #[error("traversal stopped after {} entries: {source}", .gathered.len())]
    TraversalStopped {
        gathered: Vec<Entry>,
        source: Box<ClientError>,
    },
}

pub type ClientResult<T> = Result<T, ClientError>;
