//! Errors from signing, recovery and verification

use thiserror::Error;

/// Cryptographic operation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The signing backend refused the digest
    #[error("signing failed: {0}")]
    SigningFailed(String),

    /// Encoded signature is not 65 bytes long
    #[error("signature must be 65 bytes, got {0}")]
    SignatureLength(usize),

    /// r or s is not a valid scalar
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// v does not map to a recovery id
    #[error("invalid recovery byte {0}")]
    InvalidRecoveryId(u8),

    /// No public key matches the signature
    #[error("public key recovery failed: {0}")]
    RecoveryFailed(String),

    /// Private key is zero, out of range or the wrong length
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// The verification backend could not produce a verdict
    #[error("verifier unavailable: {0}")]
    VerifierUnavailable(String),
}

/// Result type for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;
