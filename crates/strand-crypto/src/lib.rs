//! Cryptographic primitives for the Strand ledger client.
//!
//! Two concerns live here: the deterministic digest functions that give
//! entries, chains, and commit messages their identities ([`digest`]), and
//! the Ed25519 entry-credit keypair used to pay for and authorize commits
//! ([`signer`]).
//!
//! Every digest is a pure function over bytes; nothing in this crate holds
//! state or touches the network.

pub mod digest;
pub mod signer;

pub use digest::{derive_chain_id, entry_digest, entry_hash, sha, shad, weld};
pub use signer::{CreditKey, CreditPublicKey, CreditSignature, SignatureError};
pub use signer::{PUBLIC_KEY_LEN, SIGNATURE_LEN};
