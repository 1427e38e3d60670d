use tracing::info;

use strand_crypto::CreditKey;
use strand_protocol::{
    compose_chain_commit, compose_chain_reveal, compose_entry_commit, compose_entry_reveal, Chain,
};
use strand_types::{Entry, Hash256};

use crate::error::ClientResult;
use crate::node::NodeApi;

/// Commit a new chain: pay for it and authorize its reveal.
///
/// Returns the node's transaction id. Composition failures (oversize entry)
/// surface before any network call; remote rejections come back verbatim.
pub fn commit_chain(node: &dyn NodeApi, chain: &Chain, key: &CreditKey) -> ClientResult<String> {
    let payload = compose_chain_commit(chain, key)?;
    let ack = node.submit_commit(&payload)?;
    info!(chain = %chain.id(), txid = %ack.tx_id, "chain commit accepted");
    Ok(ack.tx_id)
}

/// Reveal a committed chain's first entry. Returns the accepted entry hash.
///
/// Exactly-once submission is the caller's responsibility; nothing here
/// deduplicates against other in-flight reveals.
pub fn reveal_chain(node: &dyn NodeApi, chain: &Chain) -> ClientResult<Hash256> {
    let payload = compose_chain_reveal(chain)?;
    let ack = node.submit_reveal(&payload)?;
    Ok(ack.entry_hash)
}

/// Commit an entry to an existing chain. Returns the transaction id.
pub fn commit_entry(node: &dyn NodeApi, entry: &Entry, key: &CreditKey) -> ClientResult<String> {
    let payload = compose_entry_commit(entry, key)?;
    let ack = node.submit_commit(&payload)?;
    info!(entry = %entry.chain_id, txid = %ack.tx_id, "entry commit accepted");
    Ok(ack.tx_id)
}

/// Reveal a committed entry. Returns the accepted entry hash.
pub fn reveal_entry(node: &dyn NodeApi, entry: &Entry) -> ClientResult<Hash256> {
    let payload = compose_entry_reveal(entry)?;
    let ack = node.submit_reveal(&payload)?;
    Ok(ack.entry_hash)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use strand_protocol::{CommitAck, RevealAck, RpcError, CHAIN_COMMIT_LEN, ENTRY_COMMIT_LEN};
    use strand_types::EBlock;

    use super::*;
    use crate::error::ClientError;
    use crate::node::ChainHead;

    /// Node double that records submitted payloads.
    #[derive(Default)]
    struct CaptureNode {
        commits: Mutex<Vec<String>>,
        reveals: Mutex<Vec<String>>,
        reject: bool,
    }

    impl NodeApi for CaptureNode {
        fn chain_head(&self, _chain_id: &Hash256) -> ClientResult<ChainHead> {
            unimplemented!("not used by submission")
        }

        fn entry_block(&self, _key_mr: &Hash256) -> ClientResult<EBlock> {
            unimplemented!("not used by submission")
        }

        fn entry(&self, _hash: &Hash256) -> ClientResult<Entry> {
            unimplemented!("not used by submission")
        }

        fn submit_commit(&self, message: &str) -> ClientResult<CommitAck> {
            if self.reject {
                return Err(ClientError::Node(RpcError {
                    code: -32011,
                    message: "Repeated Commit".into(),
                    data: None,
                }));
            }
            self.commits.lock().unwrap().push(message.to_string());
            Ok(CommitAck {
                message: "Commit Success".into(),
                tx_id: "f1".repeat(32),
            })
        }

        fn submit_reveal(&self, entry: &str) -> ClientResult<RevealAck> {
            self.reveals.lock().unwrap().push(entry.to_string());
            let parsed = Entry::unmarshal_binary(&hex::decode(entry).unwrap()).unwrap();
            Ok(RevealAck {
                message: "Reveal Success".into(),
                entry_hash: strand_crypto::entry_hash(&parsed).unwrap(),
            })
        }
    }

    fn fixture_chain() -> Chain {
        Chain::from_strings("hello ledger", &["submission", "fixture"])
    }

    #[test]
    fn commit_chain_submits_a_full_commit_buffer() {
        let node = CaptureNode::default();
        let key = CreditKey::from_bytes([1; 32]);
        let txid = commit_chain(&node, &fixture_chain(), &key).unwrap();
        assert_eq!(txid, "f1".repeat(32));

        let commits = node.commits.lock().unwrap();
        assert_eq!(commits.len(), 1);
        let bytes = hex::decode(&commits[0]).unwrap();
        assert_eq!(bytes.len(), CHAIN_COMMIT_LEN);
    }

    #[test]
    fn reveal_chain_submits_the_marshaled_entry() {
        let node = CaptureNode::default();
        let chain = fixture_chain();
        let accepted = reveal_chain(&node, &chain).unwrap();
        assert_eq!(
            accepted,
            strand_crypto::entry_hash(chain.first_entry()).unwrap()
        );

        let reveals = node.reveals.lock().unwrap();
        let bytes = hex::decode(&reveals[0]).unwrap();
        assert_eq!(bytes, chain.first_entry().marshal_binary().unwrap());
    }

    #[test]
    fn commit_entry_uses_the_short_layout() {
        let node = CaptureNode::default();
        let key = CreditKey::from_bytes([2; 32]);
        let entry = Entry::new(
            Hash256::from_bytes([6; 32]),
            vec![b"seq".to_vec()],
            b"more data".to_vec(),
        );
        commit_entry(&node, &entry, &key).unwrap();
        let commits = node.commits.lock().unwrap();
        assert_eq!(hex::decode(&commits[0]).unwrap().len(), ENTRY_COMMIT_LEN);
    }

    #[test]
    fn reveal_entry_returns_the_accepted_hash() {
        let node = CaptureNode::default();
        let entry = Entry::new(Hash256::from_bytes([6; 32]), vec![], b"x".to_vec());
        let accepted = reveal_entry(&node, &entry).unwrap();
        assert_eq!(accepted, strand_crypto::entry_hash(&entry).unwrap());
    }

    #[test]
    fn remote_rejection_propagates_verbatim() {
        let node = CaptureNode {
            reject: true,
            ..CaptureNode::default()
        };
        let key = CreditKey::from_bytes([3; 32]);
        let err = commit_chain(&node, &fixture_chain(), &key).unwrap_err();
        match err {
            ClientError::Node(rpc) => {
                assert_eq!(rpc.code, -32011);
                assert_eq!(rpc.message, "Repeated Commit");
            }
            other => panic!("expected Node, got: {other}"),
        }
    }

    #[test]
    fn oversize_entry_fails_before_submission() {
        let node = CaptureNode::default();
        let key = CreditKey::from_bytes([4; 32]);
        let chain = Chain::new(vec![], vec![0u8; 11 * 1024]);
        let err = commit_chain(&node, &chain, &key).unwrap_err();
        assert!(matches!(err, ClientError::Protocol(_)));
        assert!(node.commits.lock().unwrap().is_empty());
    }
}
