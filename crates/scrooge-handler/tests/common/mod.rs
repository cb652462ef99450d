//! Shared fixtures for handler integration tests

#![allow(dead_code)]

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use scrooge_crypto::{
    public_key_to_address, CryptoError, CryptoResult, PrivateKey, Signature, SignatureVerifier,
};
use scrooge_primitives::{Address, Amount, H256};
use scrooge_types::{OutPoint, Transaction, TxBuilder, TxOutput};
use scrooge_utxo::UtxoPool;
use std::cell::Cell;

/// Key holder that can own and spend outputs
pub struct Party {
    key: PrivateKey,
    pub address: Address,
}

impl Party {
    pub fn random() -> Self {
        let key = SigningKey::random(&mut OsRng);
        let address = public_key_to_address(key.verifying_key());
        Self { key, address }
    }

    /// Spend `from` (all owned by this party), paying `outputs`
    pub fn spend(&self, from: &[OutPoint], outputs: &[(Amount, Address)]) -> Transaction {
        let mut builder = TxBuilder::new();
        for outpoint in from {
            builder = builder.input(outpoint.tx_hash, outpoint.index);
        }
        for (value, recipient) in outputs {
            builder = builder.output(*value, *recipient);
        }
        for index in 0..from.len() {
            builder = builder.sign_input(index, &self.key).unwrap();
        }
        builder.build()
    }
}

/// Outpoint of a genesis output
pub fn genesis_outpoint(index: u32) -> OutPoint {
    OutPoint::new(H256::from_bytes([0x47; 32]), index)
}

/// Pool holding one genesis output per `(owner, value)`
pub fn genesis_pool(entries: &[(Address, Amount)]) -> UtxoPool {
    entries
        .iter()
        .enumerate()
        .map(|(i, (owner, value))| (genesis_outpoint(i as u32), TxOutput::new(*value, *owner)))
        .collect()
}

/// Verifier that answers `Ok(true)` until `fail_after` calls, then faults
pub struct MockVerifier {
    fail_after: usize,
    calls: Cell<usize>,
}

impl MockVerifier {
    pub fn failing_after(fail_after: usize) -> Self {
        Self {
            fail_after,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SignatureVerifier for MockVerifier {
    fn verify(&self, _: &Address, _: &[u8], _: Option<&Signature>) -> CryptoResult<bool> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if call >= self.fail_after {
            return Err(CryptoError::VerifierUnavailable("mock fault".to_string()));
        }
        Ok(true)
    }
}
