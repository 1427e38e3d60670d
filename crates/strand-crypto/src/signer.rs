/// Width of an embedded public key in a commit message.
pub const PUBLIC_KEY_LEN: usize = 32;
/// Width of an embedded signature in a commit message.
pub const SIGNATURE_LEN: usize = 64;

/// Ed25519 entry-credit signing key.
///
/// Pays for and authorizes commit messages. Key material is read-only during
/// signing, so one key may be shared by concurrent composers.
pub struct CreditKey(ed25519_dalek::SigningKey);

/// Ed25519 entry-credit public key, as embedded in commit messages.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditPublicKey(ed25519_dalek::VerifyingKey);

/// Ed25519 signature over a commit buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditSignature(ed25519_dalek::Signature);

impl CreditKey {
    /// Generate a new random key.
    pub fn generate() -> Self {
        let mut csprng = rand::thread_rng();
        Self(ed25519_dalek::SigningKey::generate(&mut csprng))
    }

    /// Create from a raw 32-byte secret.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(ed25519_dalek::SigningKey::from_bytes(&bytes))
    }

    /// The corresponding public key.
    pub fn public_key(&self) -> CreditPublicKey {
        CreditPublicKey(self.0.verifying_key())
    }

    /// Sign a message buffer.
    pub fn sign(&self, message: &[u8]) -> CreditSignature {
        use ed25519_dalek::Signer;
        CreditSignature(self.0.sign(message))
    }

    /// Raw secret key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl CreditPublicKey {
    /// Verify a signature on a message.
    pub fn verify(&self, message: &[u8], signature: &CreditSignature) -> Result<(), SignatureError> {
        use ed25519_dalek::Verifier;
        self.0
            .verify(message, &signature.0)
            .map_err(|_| SignatureError::InvalidSignature)
    }

    /// Raw public key bytes.
    pub fn as_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Create from raw 32-byte public key.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, SignatureError> {
        let key = ed25519_dalek::VerifyingKey::from_bytes(&bytes)
            .map_err(|_| SignatureError::InvalidKey)?;
        Ok(Self(key))
    }
}

impl CreditSignature {
    /// Raw 64-byte signature.
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0.to_bytes()
    }

    /// Create from raw 64-byte signature.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(ed25519_dalek::Signature::from_bytes(&bytes))
    }
}

impl std::fmt::Debug for CreditKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CreditKey(<redacted>)")
    }
}

impl std::fmt::Debug for CreditPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CreditPublicKey({})", hex::encode(self.0.to_bytes()))
    }
}

impl std::fmt::Debug for CreditSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CreditSignature({}...)", hex::encode(&self.0.to_bytes()[..8]))
    }
}

/// Errors from signing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("invalid key")]
    InvalidKey,
}
