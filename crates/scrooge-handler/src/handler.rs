//! Batch acceptance over an owned UTXO pool

use crate::error::{HandlerError, HandlerResult};
use crate::validator;
use scrooge_crypto::{CryptoError, Secp256k1Verifier, SignatureVerifier};
use scrooge_types::Transaction;
use scrooge_utxo::UtxoPool;

/// Accept the valid subset of `candidates` in one greedy pass.
///
/// Candidates are checked in the order given, each against the pool as left
/// by the ones accepted before it. An accepted transaction immediately
/// removes the outputs it spends and adds its own, so a later candidate can
/// spend those outputs and a later rival for the same output fails the
/// existence check. Rejected candidates are dropped and never retried.
///
/// Returns the accepted transactions in acceptance order. On a verifier
/// fault the error is returned; transactions accepted before the fault stay
/// applied to `pool`.
pub fn accept_batch<V>(
    candidates: &[Transaction],
    pool: &mut UtxoPool,
    verifier: &V,
) -> Result<Vec<Transaction>, CryptoError>
where
    V: SignatureVerifier + ?Sized,
{
    let mut accepted = Vec::new();

    for tx in candidates {
        match validator::check_tx(tx, pool, verifier) {
            Ok(()) => {
                apply(tx, pool);
                tracing::debug!(tx = %tx.hash().short(), "accepted");
                accepted.push(tx.clone());
            }
            Err(HandlerError::Rejected(reason)) => {
                tracing::debug!(tx = %tx.hash().short(), %reason, "rejected");
            }
            Err(HandlerError::Crypto(e)) => {
                tracing::error!(tx = %tx.hash(), error = %e, "signature verifier failed");
                return Err(e);
            }
        }
    }

    Ok(accepted)
}

/// Spend the inputs of `tx` and add its outputs
fn apply(tx: &Transaction, pool: &mut UtxoPool) {
    for outpoint in tx.spent_outpoints() {
        pool.remove(&outpoint);
    }
    for (outpoint, output) in tx.created_outputs() {
        pool.insert(outpoint, output.clone());
    }
}

/// Transaction handler owning the live UTXO pool.
///
/// The pool given at construction is copied, so the caller's pool is never
/// touched. Each [`handle_txs`](Self::handle_txs) call is one epoch.
#[derive(Debug, Clone)]
pub struct TxHandler<V = Secp256k1Verifier> {
    pool: UtxoPool,
    verifier: V,
    epochs: u64,
}

impl TxHandler {
    /// Create a handler over a copy of `pool`, verifying secp256k1 signatures
    pub fn new(pool: &UtxoPool) -> Self {
        Self::with_verifier(pool, Secp256k1Verifier::new())
    }
}

impl<V: SignatureVerifier> TxHandler<V> {
    /// Create a handler over a copy of `pool` with a custom verifier
    pub fn with_verifier(pool: &UtxoPool, verifier: V) -> Self {
        Self {
            pool: pool.clone(),
            verifier,
            epochs: 0,
        }
    }

    /// Current pool state
    pub fn pool(&self) -> &UtxoPool {
        &self.pool
    }

    /// Release the pool
    pub fn into_pool(self) -> UtxoPool {
        self.pool
    }

    /// The verifier in use
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Completed epochs
    pub fn epochs(&self) -> u64 {
        self.epochs
    }

    /// Check `tx` against the current pool, reporting the broken rule
    pub fn check_tx(&self, tx: &Transaction) -> HandlerResult<()> {
        validator::check_tx(tx, &self.pool, &self.verifier)
    }

    /// Check whether `tx` is valid against the current pool
    pub fn is_valid_tx(&self, tx: &Transaction) -> Result<bool, CryptoError> {
        validator::is_valid_tx(tx, &self.pool, &self.verifier)
    }

    /// Run one epoch over `candidates`, see [`accept_batch`]
    pub fn handle_txs(&mut self, candidates: &[Transaction]) -> Result<Vec<Transaction>, CryptoError> {
        let epoch = self.epochs + 1;
        let accepted = accept_batch(candidates, &mut self.pool, &self.verifier)?;
        self.epochs = epoch;

        tracing::info!(
            epoch,
            candidates = candidates.len(),
            accepted = accepted.len(),
            pool_size = self.pool.len(),
            "epoch complete"
        );
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrooge_crypto::{CryptoResult, Signature};
    use scrooge_primitives::{Address, H256};
    use scrooge_types::{OutPoint, TxBuilder, TxOutput};

    /// Accepts every signature
    struct Permissive;

    impl SignatureVerifier for Permissive {
        fn verify(&self, _: &Address, _: &[u8], _: Option<&Signature>) -> CryptoResult<bool> {
            Ok(true)
        }
    }

    fn owner() -> Address {
        Address::from_bytes([0xaa; 20])
    }

    fn seed() -> (UtxoPool, OutPoint) {
        let outpoint = OutPoint::new(H256::from_bytes([1; 32]), 0);
        let mut pool = UtxoPool::new();
        pool.insert(outpoint, TxOutput::new(10, owner()));
        (pool, outpoint)
    }

    fn spend(from: OutPoint, value: i64) -> Transaction {
        TxBuilder::new()
            .input(from.tx_hash, from.index)
            .output(value, owner())
            .build()
    }

    // ==================== accept_batch ====================

    #[test]
    fn test_accept_updates_pool() {
        let (mut pool, genesis) = seed();
        let tx = spend(genesis, 4);

        let accepted = accept_batch(std::slice::from_ref(&tx), &mut pool, &Permissive).unwrap();

        assert_eq!(accepted, vec![tx.clone()]);
        assert!(!pool.contains(&genesis));
        assert_eq!(
            pool.get(&OutPoint::new(tx.hash(), 0)),
            Some(&TxOutput::new(4, owner()))
        );
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_rejected_leave_pool_untouched() {
        let (mut pool, genesis) = seed();
        let before = pool.clone();

        let accepted = accept_batch(&[spend(genesis, 11)], &mut pool, &Permissive).unwrap();

        assert!(accepted.is_empty());
        assert_eq!(pool, before);
    }

    #[test]
    fn test_empty_batch() {
        let (mut pool, _) = seed();
        let accepted = accept_batch(&[], &mut pool, &Permissive).unwrap();
        assert!(accepted.is_empty());
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_rejected_candidate_is_not_retried() {
        let (mut pool, genesis) = seed();
        let parent = spend(genesis, 10);
        let child = spend(OutPoint::new(parent.hash(), 0), 10);

        // Child arrives before its parent and is dropped for the epoch
        let accepted = accept_batch(&[child.clone(), parent.clone()], &mut pool, &Permissive).unwrap();

        assert_eq!(accepted, vec![parent.clone()]);
        assert!(pool.contains(&OutPoint::new(parent.hash(), 0)));
        assert!(!pool.contains(&OutPoint::new(child.hash(), 0)));
    }

    // ==================== TxHandler ====================

    #[test]
    fn test_handler_copies_pool() {
        let (mut pool, genesis) = seed();
        let mut handler = TxHandler::with_verifier(&pool, Permissive);

        handler.handle_txs(&[spend(genesis, 10)]).unwrap();
        pool.insert(OutPoint::new(H256::from_bytes([2; 32]), 0), TxOutput::new(1, owner()));

        assert!(pool.contains(&genesis));
        assert!(!handler.pool().contains(&genesis));
        assert_eq!(handler.pool().len(), 1);
    }

    #[test]
    fn test_handler_counts_epochs() {
        let (pool, genesis) = seed();
        let mut handler = TxHandler::with_verifier(&pool, Permissive);
        assert_eq!(handler.epochs(), 0);

        handler.handle_txs(&[]).unwrap();
        handler.handle_txs(&[spend(genesis, 1)]).unwrap();

        assert_eq!(handler.epochs(), 2);
        assert_eq!(handler.into_pool().len(), 1);
    }

    #[test]
    fn test_handler_sees_earlier_epochs() {
        let (pool, genesis) = seed();
        let mut handler = TxHandler::with_verifier(&pool, Permissive);
        let first = spend(genesis, 10);

        handler.handle_txs(std::slice::from_ref(&first)).unwrap();

        assert_eq!(handler.is_valid_tx(&first), Ok(false));
        assert_eq!(handler.is_valid_tx(&spend(OutPoint::new(first.hash(), 0), 10)), Ok(true));
    }

    #[test]
    fn test_default_verifier_rejects_unsigned() {
        let (pool, genesis) = seed();
        let mut handler = TxHandler::new(&pool);

        assert!(handler.check_tx(&spend(genesis, 1)).is_err());
        assert!(handler.handle_txs(&[spend(genesis, 1)]).unwrap().is_empty());
        assert_eq!(handler.pool(), &pool);
    }
}
