//! Wallet storage boundary for the Strand client toolkit.
//!
//! The toolkit consumes wallet persistence as a black box: [`WalletStore`]
//! is the pluggable backend contract (seed and entry-credit keys), and
//! [`MemoryWalletStore`] is the in-memory reference implementation used in
//! tests and short-lived processes. [`Wallet`] is a thin facade for the
//! common flows: create with a seed phrase, generate keys, look them up,
//! export everything.
//!
//! Mnemonic parsing, child-key derivation, and encryption at rest belong to
//! the key-management collaborator, not this crate; the seed phrase is
//! persisted opaquely.

pub mod error;
pub mod memory;
pub mod traits;
pub mod types;
pub mod wallet;

pub use error::{WalletError, WalletResult};
pub use memory::MemoryWalletStore;
pub use traits::WalletStore;
pub use types::{StoredCreditKey, WalletExport, WalletSeed};
pub use wallet::Wallet;
