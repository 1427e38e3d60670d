//! In-memory wallet store for testing and ephemeral use.
//!
//! [`MemoryWalletStore`] keeps all state in maps behind `RwLock`s. It
//! implements the full [`WalletStore`] trait and is suitable for unit tests
//! and short-lived processes; data is lost when the store is dropped.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{WalletError, WalletResult};
use crate::traits::WalletStore;
use crate::types::{StoredCreditKey, WalletSeed};

/// An in-memory implementation of [`WalletStore`].
#[derive(Debug, Default)]
pub struct MemoryWalletStore {
    seed: RwLock<Option<WalletSeed>>,
    keys: RwLock<HashMap<[u8; 32], StoredCreditKey>>,
}

impl MemoryWalletStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(err: T) -> WalletError
where
    T: std::fmt::Display,
{
    WalletError::Storage(format!("lock poisoned: {err}"))
}

impl WalletStore for MemoryWalletStore {
    fn seed(&self) -> WalletResult<Option<WalletSeed>> {
        let seed = self.seed.read().map_err(poisoned)?;
        Ok(seed.clone())
    }

    fn put_seed(&self, seed: &WalletSeed) -> WalletResult<()> {
        let mut slot = self.seed.write().map_err(poisoned)?;
        *slot = Some(seed.clone());
        Ok(())
    }

    fn credit_key(&self, public: &[u8; 32]) -> WalletResult<Option<StoredCreditKey>> {
        let keys = self.keys.read().map_err(poisoned)?;
        Ok(keys.get(public).cloned())
    }

    fn put_credit_key(&self, key: &StoredCreditKey) -> WalletResult<()> {
        let mut keys = self.keys.write().map_err(poisoned)?;
        keys.insert(key.public, key.clone());
        Ok(())
    }

    fn list_credit_keys(&self) -> WalletResult<Vec<StoredCreditKey>> {
        let keys = self.keys.read().map_err(poisoned)?;
        Ok(keys.values().cloned().collect())
    }

    fn remove_credit_key(&self, public: &[u8; 32]) -> WalletResult<bool> {
        let mut keys = self.keys.write().map_err(poisoned)?;
        Ok(keys.remove(public).is_some())
    }
}

#[cfg(test)]
mod tests {
    use strand_crypto::CreditKey;

    use super::*;

    fn stored(seed_byte: u8) -> StoredCreditKey {
        StoredCreditKey::from(&CreditKey::from_bytes([seed_byte; 32]))
    }

    #[test]
    fn seed_roundtrip() {
        let store = MemoryWalletStore::new();
        assert_eq!(store.seed().unwrap(), None);

        let seed = WalletSeed {
            phrase: "twelve words go here".into(),
        };
        store.put_seed(&seed).unwrap();
        assert_eq!(store.seed().unwrap(), Some(seed));
    }

    #[test]
    fn key_roundtrip() {
        let store = MemoryWalletStore::new();
        let key = stored(1);
        store.put_credit_key(&key).unwrap();
        assert_eq!(store.credit_key(&key.public).unwrap(), Some(key));
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryWalletStore::new();
        assert_eq!(store.credit_key(&[9; 32]).unwrap(), None);
    }

    #[test]
    fn list_returns_every_key() {
        let store = MemoryWalletStore::new();
        store.put_credit_key(&stored(1)).unwrap();
        store.put_credit_key(&stored(2)).unwrap();
        assert_eq!(store.list_credit_keys().unwrap().len(), 2);
    }

    #[test]
    fn put_is_idempotent_per_public_key() {
        let store = MemoryWalletStore::new();
        store.put_credit_key(&stored(1)).unwrap();
        store.put_credit_key(&stored(1)).unwrap();
        assert_eq!(store.list_credit_keys().unwrap().len(), 1);
    }

    #[test]
    fn remove_reports_existence() {
        let store = MemoryWalletStore::new();
        let key = stored(1);
        store.put_credit_key(&key).unwrap();
        assert!(store.remove_credit_key(&key.public).unwrap());
        assert!(!store.remove_credit_key(&key.public).unwrap());
        assert_eq!(store.credit_key(&key.public).unwrap(), None);
    }
}
