use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("no seed present in the wallet store")]
    SeedMissing,

    #[error("the wallet store already holds a seed")]
    SeedAlreadyPresent,

    #[error("no credit key stored for public key {0}")]
    KeyNotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type WalletResult<T> = Result<T, WalletError>;
