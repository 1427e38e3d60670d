use serde::{Deserialize, Serialize};

use strand_crypto::CreditKey;

/// The wallet seed, persisted opaquely.
///
/// The phrase's format and the derivation of key material from it are the
/// key-management collaborator's concern; stores treat it as a string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSeed {
    pub phrase: String,
}

impl std::fmt::Debug for WalletSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WalletSeed(<redacted>)")
    }
}

/// An entry-credit keypair at rest.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCreditKey {
    pub public: [u8; 32],
    pub secret: [u8; 32],
}

impl StoredCreditKey {
    /// Reconstruct the signing key.
    pub fn to_credit_key(&self) -> CreditKey {
        CreditKey::from_bytes(self.secret)
    }
}

impl From<&CreditKey> for StoredCreditKey {
    fn from(key: &CreditKey) -> Self {
        Self {
            public: key.public_key().as_bytes(),
            secret: *key.as_bytes(),
        }
    }
}

impl std::fmt::Debug for StoredCreditKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StoredCreditKey({}, <redacted>)", hex::encode(self.public))
    }
}

/// Everything a wallet holds, in exportable form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WalletExport {
    pub seed: WalletSeed,
    pub keys: Vec<StoredCreditKey>,
}
