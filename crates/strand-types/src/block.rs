use serde::{Deserialize, Serialize};

use crate::hash::Hash256;

/// Header of an entry block.
///
/// `prev_key_mr` is the backward pointer to the previous entry block of the
/// same chain; the all-zero sentinel marks the chain's first block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EBlockHeader {
    #[serde(rename = "chainid")]
    pub chain_id: Hash256,
    #[serde(rename = "prevkeymr")]
    pub prev_key_mr: Hash256,
    #[serde(rename = "blocksequencenumber")]
    pub block_sequence_number: u64,
    /// Finalization time of the block, in seconds.
    pub timestamp: u64,
    /// Height of the directory block that sealed this entry block.
    #[serde(rename = "dbheight")]
    pub directory_block_height: u64,
}

/// One entry reference inside an entry block, in block order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EBlockEntry {
    #[serde(rename = "entryhash")]
    pub entry_hash: Hash256,
    pub timestamp: u64,
}

/// A finalized, ordered batch of entries for one chain within one period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EBlock {
    pub header: EBlockHeader,
    #[serde(rename = "entrylist")]
    pub entry_list: Vec<EBlockEntry>,
}

impl EBlock {
    /// Returns `true` if this is the chain's first block (no predecessor).
    pub fn is_chain_root(&self) -> bool {
        self.header.prev_key_mr.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_node_json_shape() {
        let json = r#"{
            "header": {
                "blocksequencenumber": 4,
                "chainid": "1111111111111111111111111111111111111111111111111111111111111111",
                "prevkeymr": "0000000000000000000000000000000000000000000000000000000000000000",
                "timestamp": 1700000000,
                "dbheight": 42
            },
            "entrylist": [
                {
                    "entryhash": "2222222222222222222222222222222222222222222222222222222222222222",
                    "timestamp": 1700000060
                }
            ]
        }"#;
        let block: EBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.header.block_sequence_number, 4);
        assert_eq!(block.header.directory_block_height, 42);
        assert_eq!(block.entry_list.len(), 1);
        assert!(block.is_chain_root());
    }

    #[test]
    fn non_zero_prev_is_not_root() {
        let block = EBlock {
            header: EBlockHeader {
                chain_id: Hash256::from_bytes([1; 32]),
                prev_key_mr: Hash256::from_bytes([2; 32]),
                block_sequence_number: 1,
                timestamp: 0,
                directory_block_height: 0,
            },
            entry_list: vec![],
        };
        assert!(!block.is_chain_root());
    }

    #[test]
    fn json_roundtrip() {
        let block = EBlock {
            header: EBlockHeader {
                chain_id: Hash256::from_bytes([3; 32]),
                prev_key_mr: Hash256::zero(),
                block_sequence_number: 0,
                timestamp: 10,
                directory_block_height: 7,
            },
            entry_list: vec![EBlockEntry {
                entry_hash: Hash256::from_bytes([4; 32]),
                timestamp: 11,
            }],
        };
        let json = serde_json::to_string(&block).unwrap();
        let back: EBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(block, back);
    }
}
