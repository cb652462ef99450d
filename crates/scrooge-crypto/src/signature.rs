//! secp256k1 signatures over Keccak-256 message digests
//!
//! Signatures travel as 65 bytes, `r || s || v`, with `v` stored as 27 or
//! 28. Any other `v` is malformed, so each signature has exactly one
//! encoding for a given `s`. Signing always produces the low-s form, and
//! recovery refuses nothing on that basis; the verifier does.

use crate::{keccak256, CryptoError, CryptoResult};
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, SigningKey, VerifyingKey};
use scrooge_primitives::{Address, H256};

const V_OFFSET: u8 = 27;

/// Public key
pub type PublicKey = VerifyingKey;

/// Private key
pub type PrivateKey = SigningKey;

/// Recoverable ECDSA signature
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    /// r scalar, big-endian
    pub r: [u8; 32],
    /// s scalar, big-endian
    pub s: [u8; 32],
    /// Recovery byte, 27 or 28
    pub v: u8,
}

impl Signature {
    /// Encoded length in bytes
    pub const LEN: usize = 65;

    /// Assemble from components
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }

    /// Recovery id with the 27 offset removed, `None` unless `v` is 27 or 28
    pub fn recovery_id(&self) -> Option<u8> {
        self.v.checked_sub(V_OFFSET).filter(|id| *id <= 1)
    }

    /// `r || s || v`
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut out = [0u8; Self::LEN];
        let (r, rest) = out.split_at_mut(32);
        let (s, v) = rest.split_at_mut(32);
        r.copy_from_slice(&self.r);
        s.copy_from_slice(&self.s);
        v[0] = self.v;
        out
    }

    /// Split `r || s || v`
    pub fn from_bytes(bytes: &[u8; Self::LEN]) -> Self {
        let mut sig = Self::new([0u8; 32], [0u8; 32], bytes[64]);
        sig.r.copy_from_slice(&bytes[..32]);
        sig.s.copy_from_slice(&bytes[32..64]);
        sig
    }

    /// Parse a slice that must hold exactly [`Signature::LEN`] bytes
    pub fn from_slice(slice: &[u8]) -> CryptoResult<Self> {
        <&[u8; Self::LEN]>::try_from(slice)
            .map(Self::from_bytes)
            .map_err(|_| CryptoError::SignatureLength(slice.len()))
    }

    /// Check if `s` is a valid scalar in the lower half of the curve order
    pub fn is_low_s(&self) -> bool {
        EcdsaSignature::from_scalars(self.r, self.s)
            .map(|signature| signature.normalize_s().is_none())
            .unwrap_or(false)
    }

    fn to_ecdsa(&self) -> CryptoResult<(EcdsaSignature, RecoveryId)> {
        let signature = EcdsaSignature::from_scalars(self.r, self.s)
            .map_err(|e| CryptoError::MalformedSignature(e.to_string()))?;
        let recovery_id = self
            .recovery_id()
            .and_then(RecoveryId::from_byte)
            .ok_or(CryptoError::InvalidRecoveryId(self.v))?;
        Ok((signature, recovery_id))
    }
}

/// Sign a 32-byte digest, returning the low-s form
pub fn sign(digest: &H256, key: &PrivateKey) -> CryptoResult<Signature> {
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(digest.as_bytes())
        .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

    // Negating s flips the parity of the recovered point
    let (signature, recovery_id) = match signature.normalize_s() {
        Some(low) => (
            low,
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
        ),
        None => (signature, recovery_id),
    };

    Ok(Signature::new(
        signature.r().to_bytes().into(),
        signature.s().to_bytes().into(),
        recovery_id.to_byte() + V_OFFSET,
    ))
}

/// Recover the signer's public key from a digest and signature
pub fn recover_public_key(digest: &H256, signature: &Signature) -> CryptoResult<PublicKey> {
    let (signature, recovery_id) = signature.to_ecdsa()?;
    VerifyingKey::recover_from_prehash(digest.as_bytes(), &signature, recovery_id)
        .map_err(|e| CryptoError::RecoveryFailed(e.to_string()))
}

/// Owner address of a public key: the last 20 bytes of the Keccak-256 of the
/// uncompressed point, tag byte excluded
pub fn public_key_to_address(public_key: &PublicKey) -> Address {
    let point = public_key.to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest.as_bytes()[12..]);
    Address::from_bytes(bytes)
}

/// Parse a private key from 32 raw bytes
pub fn private_key_from_bytes(bytes: &[u8]) -> CryptoResult<PrivateKey> {
    SigningKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey)
}
