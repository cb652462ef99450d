//! Signature verification against an owner address
//!
//! Validation never touches key material directly. It asks a
//! [`SignatureVerifier`] whether `signature` over `message` was produced by the
//! key behind `owner`. `Ok(false)` means "does not authorize". `Err` means the
//! verifier itself could not answer, and callers propagate it.

use crate::{keccak256, public_key_to_address, recover_public_key, CryptoResult, Signature};
use scrooge_primitives::Address;

/// Checks that a signature over a message authorizes an owner
pub trait SignatureVerifier {
    /// Returns `Ok(true)` iff `signature` over `message` was made by `owner`.
    ///
    /// A missing signature never authorizes.
    fn verify(
        &self,
        owner: &Address,
        message: &[u8],
        signature: Option<&Signature>,
    ) -> CryptoResult<bool>;
}

impl<V: SignatureVerifier + ?Sized> SignatureVerifier for &V {
    fn verify(
        &self,
        owner: &Address,
        message: &[u8],
        signature: Option<&Signature>,
    ) -> CryptoResult<bool> {
        (**self).verify(owner, message, signature)
    }
}

/// secp256k1 verifier using public key recovery.
///
/// The message is hashed with Keccak-256, the signer's key is recovered from
/// the signature, and the derived address is compared with `owner`. Signatures
/// that are high-s, carry a `v` other than 27 or 28, or from which no key can
/// be recovered do not authorize.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Verifier;

impl Secp256k1Verifier {
    /// Create a new verifier
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerifier for Secp256k1Verifier {
    fn verify(
        &self,
        owner: &Address,
        message: &[u8],
        signature: Option<&Signature>,
    ) -> CryptoResult<bool> {
        let Some(signature) = signature else {
            return Ok(false);
        };
        if !signature.is_low_s() {
            return Ok(false);
        }

        let message_hash = keccak256(message);
        match recover_public_key(&message_hash, signature) {
            Ok(public_key) => Ok(public_key_to_address(&public_key) == *owner),
            Err(e) => {
                tracing::trace!(owner = %owner, error = %e, "signature does not recover a key");
                Ok(false)
            }
        }
    }
}
