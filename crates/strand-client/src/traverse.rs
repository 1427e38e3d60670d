use tracing::debug;

use strand_types::{EBlock, Entry, Hash256};

use crate::error::{ClientError, ClientResult};
use crate::node::NodeApi;

/// Reconstruct a chain's full entry history, oldest first.
///
/// Resolves the head pointer, then walks the backward-linked entry blocks
/// newest-first, prepending each block's entries until the all-zero sentinel
/// is reached. The walk is an explicit loop with an accumulator — block
/// fetches are inherently sequential because each block names the next
/// target.
///
/// A pending chain fails with [`ClientError::ChainPending`] before any block
/// fetch. A mid-walk failure returns [`ClientError::TraversalStopped`]
/// carrying everything gathered so far plus the propagated cause.
pub fn get_all_chain_entries(node: &dyn NodeApi, chain_id: &str) -> ClientResult<Vec<Entry>> {
    let chain_id = Hash256::from_hex(chain_id)?;
    let mut cursor = resolve_head(node, &chain_id)?;

    let mut entries: Vec<Entry> = Vec::new();
    while !cursor.is_zero() {
        let block = match node.entry_block(&cursor) {
            Ok(block) => block,
            Err(source) => return Err(stopped(entries, source)),
        };
        let mut batch = match entry_block_entries(node, &block) {
            Ok(batch) => batch,
            Err(source) => return Err(stopped(entries, source)),
        };
        debug!(block = %cursor, entries = batch.len(), "collected entry block");

        // Traversal runs newest-first; prepending each batch leaves the
        // final list in chronological order.
        batch.extend(entries);
        entries = batch;
        cursor = block.header.prev_key_mr;
    }

    Ok(entries)
}

/// Locate and fetch a chain's very first entry.
///
/// Applies the same pending short-circuit as the full walk, then follows
/// backward pointers to the root block (the one whose predecessor is the
/// sentinel) and fetches only the first entry it lists.
pub fn get_first_entry(node: &dyn NodeApi, chain_id: &str) -> ClientResult<Entry> {
    let chain_id = Hash256::from_hex(chain_id)?;
    let mut cursor = resolve_head(node, &chain_id)?;

    let mut block = node.entry_block(&cursor)?;
    while !block.header.prev_key_mr.is_zero() {
        cursor = block.header.prev_key_mr;
        block = node.entry_block(&cursor)?;
    }

    let first = block
        .entry_list
        .first()
        .ok_or_else(|| ClientError::EmptyEntryBlock(cursor.to_hex()))?;
    node.entry(&first.entry_hash)
}

/// Fetch every entry referenced by one block, in the block's listed order.
///
/// The block is already resolved, so the per-entry fetches are independent;
/// they are still issued sequentially to keep the client single-threaded.
pub fn entry_block_entries(node: &dyn NodeApi, block: &EBlock) -> ClientResult<Vec<Entry>> {
    let mut entries = Vec::with_capacity(block.entry_list.len());
    for item in &block.entry_list {
        entries.push(node.entry(&item.entry_hash)?);
    }
    Ok(entries)
}

/// Whether the chain is known to the node, either finalized or pending.
pub fn chain_exists(node: &dyn NodeApi, chain_id: &str) -> bool {
    let Ok(chain_id) = Hash256::from_hex(chain_id) else {
        return false;
    };
    match node.chain_head(&chain_id) {
        Ok(head) => head.key_mr.is_some() || head.pending,
        Err(_) => false,
    }
}

fn resolve_head(node: &dyn NodeApi, chain_id: &Hash256) -> ClientResult<Hash256> {
    let head = node.chain_head(chain_id)?;
    match head.key_mr {
        Some(key_mr) => Ok(key_mr),
        None if head.pending => Err(ClientError::ChainPending),
        None => Err(ClientError::MissingChainHead(chain_id.to_hex())),
    }
}

fn stopped(gathered: Vec<Entry>, source: ClientError) -> ClientError {
    ClientError::TraversalStopped {
        gathered,
        source: Box::new(source),
    }
}
