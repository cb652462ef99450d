//! # scrooge-crypto
//!
//! Cryptographic primitives for the Scrooge ledger.
//!
//! Owners are identified by the address of their secp256k1 key. Inputs are
//! authorized by a recoverable signature over the Keccak-256 digest of the
//! input's payload, checked through a [`SignatureVerifier`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod hash;
mod signature;
mod verifier;

pub use error::{CryptoError, CryptoResult};
pub use hash::keccak256;
pub use signature::{
    private_key_from_bytes, public_key_to_address, recover_public_key, sign, PrivateKey,
    PublicKey, Signature,
};
pub use verifier::{Secp256k1Verifier, SignatureVerifier};
