//! UTXO pool implementation

use scrooge_types::{OutPoint, TxOutput};
use std::collections::hash_map::{self, HashMap};

/// Set of unspent outputs, keyed by the outpoint that created them.
///
/// Every entry is an output no accepted transaction has consumed yet.
/// `Clone` copies every key and payload, so a cloned pool never observes
/// mutations of the original and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtxoPool {
    utxos: HashMap<OutPoint, TxOutput>,
}

impl UtxoPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `outpoint` is unspent
    pub fn contains(&self, outpoint: &OutPoint) -> bool {
        self.utxos.contains_key(outpoint)
    }

    /// Look up the output behind `outpoint`
    pub fn get(&self, outpoint: &OutPoint) -> Option<&TxOutput> {
        self.utxos.get(outpoint)
    }

    /// Add an unspent output.
    ///
    /// Returns the payload previously stored under the same key, which only
    /// happens when a caller reuses an outpoint.
    pub fn insert(&mut self, outpoint: OutPoint, output: TxOutput) -> Option<TxOutput> {
        let previous = self.utxos.insert(outpoint, output);
        if previous.is_some() {
            tracing::warn!(%outpoint, "overwrote existing utxo");
        }
        previous
    }

    /// Remove a spent output; absent keys are ignored
    pub fn remove(&mut self, outpoint: &OutPoint) -> Option<TxOutput> {
        self.utxos.remove(outpoint)
    }

    /// Number of unspent outputs
    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    /// Check if pool is empty
    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    /// Iterate over all entries in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, OutPoint, TxOutput> {
        self.utxos.iter()
    }

    /// All outpoints, sorted
    pub fn outpoints(&self) -> Vec<OutPoint> {
        let mut outpoints: Vec<OutPoint> = self.utxos.keys().copied().collect();
        outpoints.sort();
        outpoints
    }

    /// Sum of all unspent values
    pub fn total_value(&self) -> i128 {
        self.utxos.values().map(|o| o.value as i128).sum()
    }
}

impl FromIterator<(OutPoint, TxOutput)> for UtxoPool {
    fn from_iter<I: IntoIterator<Item = (OutPoint, TxOutput)>>(iter: I) -> Self {
        Self {
            utxos: iter.into_iter().collect(),
        }
    }
}

impl Extend<(OutPoint, TxOutput)> for UtxoPool {
    fn extend<I: IntoIterator<Item = (OutPoint, TxOutput)>>(&mut self, iter: I) {
        for (outpoint, output) in iter {
            self.insert(outpoint, output);
        }
    }
}

impl<'a> IntoIterator for &'a UtxoPool {
    type Item = (&'a OutPoint, &'a TxOutput);
    type IntoIter = hash_map::Iter<'a, OutPoint, TxOutput>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
