//! Property tests for validation and batch acceptance
//!
//! Signatures are not under test here, so every input is authorized.

use proptest::prelude::*;
use scrooge_crypto::{CryptoResult, Signature, SignatureVerifier};
use scrooge_handler::{accept_batch, is_valid_tx};
use scrooge_primitives::{Address, Amount, H256};
use scrooge_types::{OutPoint, Transaction, TxBuilder, TxOutput};
use scrooge_utxo::UtxoPool;

struct Permissive;

impl SignatureVerifier for Permissive {
    fn verify(&self, _: &Address, _: &[u8], _: Option<&Signature>) -> CryptoResult<bool> {
        Ok(true)
    }
}

fn genesis_hash() -> H256 {
    H256::from_bytes([0x47; 32])
}

fn pool_of(values: &[Amount]) -> UtxoPool {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            (
                OutPoint::new(genesis_hash(), i as u32),
                TxOutput::new(*v, Address::from_bytes([i as u8; 20])),
            )
        })
        .collect()
}

fn tx(inputs: &[u32], outputs: &[Amount]) -> Transaction {
    let mut builder = TxBuilder::new();
    for index in inputs {
        builder = builder.input(genesis_hash(), *index);
    }
    for (i, value) in outputs.iter().enumerate() {
        builder = builder.output(*value, Address::from_bytes([0xf0 ^ i as u8; 20]));
    }
    builder.build()
}

proptest! {
    #[test]
    fn prop_is_valid_tx_is_pure(
        values in prop::collection::vec(0i64..1_000, 0..6),
        inputs in prop::collection::vec(0u32..8, 0..4),
        outputs in prop::collection::vec(-10i64..1_000, 0..4),
    ) {
        let pool = pool_of(&values);
        let before = pool.clone();
        let tx = tx(&inputs, &outputs);

        let first = is_valid_tx(&tx, &pool, &Permissive);
        let second = is_valid_tx(&tx, &pool, &Permissive);

        prop_assert_eq!(first, second);
        prop_assert_eq!(pool, before);
    }

    #[test]
    fn prop_conservation(
        available in 0i64..1_000_000,
        outputs in prop::collection::vec(-5i64..500_000, 0..5),
    ) {
        let pool = pool_of(&[available]);
        let tx = tx(&[0], &outputs);

        let non_negative = outputs.iter().all(|v| *v >= 0);
        let total: i128 = outputs.iter().map(|v| i128::from(*v)).sum();
        let expected = non_negative && total <= i128::from(available);

        prop_assert_eq!(is_valid_tx(&tx, &pool, &Permissive), Ok(expected));
    }

    #[test]
    fn prop_first_valid_rival_wins(
        spends in prop::collection::vec(0i64..20, 1..6),
    ) {
        let mut pool = pool_of(&[10]);
        let rivals: Vec<Transaction> = spends.iter().map(|v| tx(&[0], &[*v])).collect();

        let accepted = accept_batch(&rivals, &mut pool, &Permissive).unwrap();

        let winner = rivals.iter().find(|t| t.total_output_value() <= 10);
        prop_assert_eq!(accepted.first(), winner);
        prop_assert!(accepted.len() <= 1);
        prop_assert!(!pool.contains(&OutPoint::new(genesis_hash(), 0)) || winner.is_none());
    }

    #[test]
    fn prop_pool_tracks_accepted_set(
        values in prop::collection::vec(0i64..1_000, 1..6),
        batch in prop::collection::vec(
            (prop::collection::vec(0u32..6, 0..3), prop::collection::vec(0i64..1_000, 0..3)),
            0..8,
        ),
    ) {
        let initial = pool_of(&values);
        let mut pool = initial.clone();
        let candidates: Vec<Transaction> = batch.iter().map(|(i, o)| tx(i, o)).collect();

        let accepted = accept_batch(&candidates, &mut pool, &Permissive).unwrap();

        let mut expected = initial.total_value();
        for t in &accepted {
            for outpoint in t.spent_outpoints() {
                // Every spent output came from the genesis set
                expected -= i128::from(initial.get(&outpoint).map_or(0, |o| o.value));
            }
            expected += t.total_output_value();
        }
        prop_assert_eq!(pool.total_value(), expected);

        for t in &accepted {
            for outpoint in t.spent_outpoints() {
                prop_assert!(!pool.contains(&outpoint));
            }
        }
    }
}
