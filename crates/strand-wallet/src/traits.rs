use crate::error::WalletResult;
use crate::types::{StoredCreditKey, WalletSeed};

/// Pluggable persistent backend for wallet state.
///
/// All implementations must satisfy these invariants:
/// - A value read after a successful write is the written value.
/// - Keys are addressed by their public key bytes.
/// - Listing returns every stored key; order is unspecified.
/// - All I/O errors are propagated, never silently ignored.
pub trait WalletStore: Send + Sync {
    /// The stored seed, if one exists.
    fn seed(&self) -> WalletResult<Option<WalletSeed>>;

    /// Store the seed, replacing any existing one.
    fn put_seed(&self, seed: &WalletSeed) -> WalletResult<()>;

    /// Look up a stored credit key by public key.
    fn credit_key(&self, public: &[u8; 32]) -> WalletResult<Option<StoredCreditKey>>;

    /// Store a credit key. Overwriting the same public key is idempotent.
    fn put_credit_key(&self, key: &StoredCreditKey) -> WalletResult<()>;

    /// Every stored credit key.
    fn list_credit_keys(&self) -> WalletResult<Vec<StoredCreditKey>>;

    /// Remove a stored credit key. Returns `true` if it existed.
    fn remove_credit_key(&self, public: &[u8; 32]) -> WalletResult<bool>;
}
