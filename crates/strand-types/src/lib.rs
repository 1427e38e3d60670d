//! Foundation types for the Strand ledger client.
//!
//! This crate provides the identifier, entry, and block types shared by every
//! other Strand crate, together with the protocol parameters (entry size
//! limits, billing unit, version byte) that the rest of the toolkit must
//! never hardcode inline.
//!
//! # Key Types
//!
//! - [`Hash256`] — 32-byte digest used for chain IDs, entry hashes, and
//!   entry-block key-Merkle-roots
//! - [`Entry`] — smallest content-addressed unit in the ledger
//! - [`EBlock`] — a finalized, backward-linked batch of entries for one chain

pub mod block;
pub mod entry;
pub mod error;
pub mod hash;
pub mod params;

pub use block::{EBlock, EBlockEntry, EBlockHeader};
pub use entry::Entry;
pub use error::TypeError;
pub use hash::Hash256;
pub use params::{
    CHAIN_CREATION_FEE, CREDIT_UNIT, ENTRY_HEADER_LEN, ENTRY_VERSION, MAX_ENTRY_PAYLOAD,
};
