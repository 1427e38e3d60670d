use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unsupported entry version {0}")]
    UnsupportedVersion(u8),

    #[error("external id section exceeds the u16 length field ({0} bytes)")]
    ExternalIdsTooLong(usize),

    #[error("truncated entry: need {needed} bytes, have {have}")]
    Truncated { needed: usize, have: usize },

    #[error("malformed external id section: {0}")]
    MalformedExternalIds(String),
}
