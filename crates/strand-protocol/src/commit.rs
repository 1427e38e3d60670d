use std::time::{SystemTime, UNIX_EPOCH};

use strand_crypto::{entry_hash, shad, weld, CreditKey};
use strand_types::{Entry, CHAIN_CREATION_FEE, ENTRY_VERSION};

use crate::chain::Chain;
use crate::error::ProtocolResult;
use crate::fee::FeeSchedule;

/// Total length of a chain commit message.
pub const CHAIN_COMMIT_LEN: usize = 200;
/// Length of the signed prefix of a chain commit message.
pub const CHAIN_COMMIT_SIGNED_LEN: usize = 104;

/// Total length of an entry commit message.
pub const ENTRY_COMMIT_LEN: usize = 136;
/// Length of the signed prefix of an entry commit message.
pub const ENTRY_COMMIT_SIGNED_LEN: usize = 40;

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Append the low 6 bytes of a big-endian millisecond timestamp.
fn push_milli_time(buf: &mut Vec<u8>, timestamp_ms: u64) {
    buf.extend_from_slice(&timestamp_ms.to_be_bytes()[2..8]);
}

/// Build the signed chain commit buffer with an explicit timestamp.
///
/// Layout: version (1) ‖ ms timestamp (6) ‖ double digest of the chain-ID
/// bytes (32) ‖ weld (32) ‖ entry hash (32) ‖ credit cost plus the chain
/// creation fee (1) ‖ public key (32) ‖ signature over everything before the
/// key (64). Fails without producing a partial buffer when the fee
/// calculator rejects the entry.
pub fn chain_commit_message(
    chain: &Chain,
    key: &CreditKey,
    timestamp_ms: u64,
) -> ProtocolResult<Vec<u8>> {
    let cost = FeeSchedule::default().entry_cost(chain.first_entry())?;
    let e_hash = entry_hash(chain.first_entry())?;

    let mut buf = Vec::with_capacity(CHAIN_COMMIT_LEN);
    buf.push(ENTRY_VERSION);
    push_milli_time(&mut buf, timestamp_ms);
    buf.extend_from_slice(&shad(chain.id().as_bytes()));
    buf.extend_from_slice(&weld(&e_hash, chain.id()));
    buf.extend_from_slice(e_hash.as_bytes());
    buf.push(cost + CHAIN_CREATION_FEE);

    let sig = key.sign(&buf);
    buf.extend_from_slice(&key.public_key().as_bytes());
    buf.extend_from_slice(&sig.to_bytes());
    Ok(buf)
}

/// Build the signed entry commit buffer with an explicit timestamp.
///
/// Same shape as a chain commit without the chain-ID digest and weld, and
/// without the creation fee: version ‖ timestamp ‖ entry hash ‖ cost ‖
/// public key ‖ signature over the preceding bytes.
pub fn entry_commit_message(
    entry: &Entry,
    key: &CreditKey,
    timestamp_ms: u64,
) -> ProtocolResult<Vec<u8>> {
    let cost = FeeSchedule::default().entry_cost(entry)?;
    let e_hash = entry_hash(entry)?;

    let mut buf = Vec::with_capacity(ENTRY_COMMIT_LEN);
    buf.push(ENTRY_VERSION);
    push_milli_time(&mut buf, timestamp_ms);
    buf.extend_from_slice(e_hash.as_bytes());
    buf.push(cost);

    let sig = key.sign(&buf);
    buf.extend_from_slice(&key.public_key().as_bytes());
    buf.extend_from_slice(&sig.to_bytes());
    Ok(buf)
}

/// Hex submission payload committing a new chain, stamped with the current
/// wall clock.
pub fn compose_chain_commit(chain: &Chain, key: &CreditKey) -> ProtocolResult<String> {
    Ok(hex::encode(chain_commit_message(chain, key, now_ms())?))
}

/// Hex submission payload revealing a chain's first entry. No signature:
/// authorization was established by the commit.
pub fn compose_chain_reveal(chain: &Chain) -> ProtocolResult<String> {
    Ok(hex::encode(chain.first_entry().marshal_binary()?))
}

/// Hex submission payload committing an entry to an existing chain.
pub fn compose_entry_commit(entry: &Entry, key: &CreditKey) -> ProtocolResult<String> {
    Ok(hex::encode(entry_commit_message(entry, key, now_ms())?))
}

/// Hex submission payload revealing an entry.
pub fn compose_entry_reveal(entry: &Entry) -> ProtocolResult<String> {
    Ok(hex::encode(entry.marshal_binary()?))
}
