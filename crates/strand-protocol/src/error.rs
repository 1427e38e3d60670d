use thiserror::Error;

use crate::fee::FeeError;
use strand_types::TypeError;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error(transparent)]
    Fee(#[from] FeeError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
