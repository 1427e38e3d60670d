use sha2::{Digest, Sha256, Sha512};
use strand_types::{Entry, Hash256, TypeError};

/// SHA-256 of raw bytes.
pub fn sha(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Double SHA-256: `sha(sha(data))`.
///
/// Used wherever the protocol hardens a digest against length-extension and
/// format confusion (chain-ID hash, weld).
pub fn shad(data: &[u8]) -> [u8; 32] {
    sha(&sha(data))
}

/// The entry digest over a marshaled entry: SHA-256 of (SHA-512(m) ‖ m).
pub fn entry_digest(marshaled: &[u8]) -> Hash256 {
    let mut buf: Vec<u8> = Sha512::digest(marshaled).to_vec();
    buf.extend_from_slice(marshaled);
    Hash256::from_bytes(sha(&buf))
}

/// Hash of an entry's marshaled binary form.
///
/// Pure function of (chain ID, external IDs, content) via the wire layout;
/// recomputed on every call.
pub fn entry_hash(entry: &Entry) -> Result<Hash256, TypeError> {
    Ok(entry_digest(&entry.marshal_binary()?))
}

/// Derive a chain ID from the founding external IDs.
///
/// Each external ID is digested individually, the digests are concatenated
/// in original order, and the concatenation is digested once more. Entry
/// content and any pre-set chain-ID field are deliberately not inputs.
pub fn derive_chain_id<T: AsRef<[u8]>>(ext_ids: &[T]) -> Hash256 {
    let mut hasher = Sha256::new();
    for id in ext_ids {
        hasher.update(sha(id.as_ref()));
    }
    Hash256::from_bytes(hasher.finalize().into())
}

/// Weld binding an entry hash to a chain ID: `shad(entry_hash ‖ chain_id)`.
pub fn weld(entry_hash: &Hash256, chain_id: &Hash256) -> [u8; 32] {
    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(entry_hash.as_bytes());
    buf.extend_from_slice(chain_id.as_bytes());
    shad(&buf)
}
