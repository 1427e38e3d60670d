use strand_crypto::CreditKey;

use crate::error::{WalletError, WalletResult};
use crate::traits::WalletStore;
use crate::types::{StoredCreditKey, WalletExport, WalletSeed};

/// Thin wallet facade over a pluggable store.
#[derive(Debug)]
pub struct Wallet<S: WalletStore> {
    store: S,
}

impl<S: WalletStore> Wallet<S> {
    /// Open a wallet over an existing store.
    ///
    /// The store must already hold a seed; an empty backend is a
    /// [`WalletError::SeedMissing`] error, not a silently initialized
    /// wallet.
    pub fn open(store: S) -> WalletResult<Self> {
        if store.seed()?.is_none() {
            return Err(WalletError::SeedMissing);
        }
        Ok(Self { store })
    }

    /// Create a wallet, persisting the given seed phrase.
    ///
    /// Fails if the store already holds a seed. The phrase is stored
    /// opaquely; validating it is the key-management collaborator's job.
    pub fn create(store: S, phrase: &str) -> WalletResult<Self> {
        if store.seed()?.is_some() {
            return Err(WalletError::SeedAlreadyPresent);
        }
        store.put_seed(&WalletSeed {
            phrase: phrase.into(),
        })?;
        Ok(Self { store })
    }

    /// The wallet's seed.
    pub fn seed(&self) -> WalletResult<WalletSeed> {
        self.store.seed()?.ok_or(WalletError::SeedMissing)
    }

    /// Generate a new entry-credit key and persist it.
    pub fn generate_credit_key(&self) -> WalletResult<CreditKey> {
        let key = CreditKey::generate();
        self.store.put_credit_key(&StoredCreditKey::from(&key))?;
        Ok(key)
    }

    /// Look up a stored credit key by its public key.
    pub fn credit_key(&self, public: &[u8; 32]) -> WalletResult<CreditKey> {
        let stored = self
            .store
            .credit_key(public)?
            .ok_or_else(|| WalletError::KeyNotFound(hex::encode(public)))?;
        Ok(stored.to_credit_key())
    }

    /// Every stored credit key, ready for signing.
    pub fn credit_keys(&self) -> WalletResult<Vec<CreditKey>> {
        Ok(self
            .store
            .list_credit_keys()?
            .iter()
            .map(StoredCreditKey::to_credit_key)
            .collect())
    }

    /// Seed and key pairs in exportable form.
    pub fn export(&self) -> WalletResult<WalletExport> {
        Ok(WalletExport {
            seed: self.seed()?,
            keys: self.store.list_credit_keys()?,
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
