//! Transaction types for the Scrooge ledger

use crate::codec;
use scrooge_crypto::Signature;
use scrooge_primitives::{Address, Amount, OutputIndex, TxHash};
use std::fmt;

/// Reference to one output of one transaction (the UTXO key)
///
/// Equality and hashing are structural over `(tx_hash, index)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutPoint {
    /// Hash of the transaction that created the output
    pub tx_hash: TxHash,
    /// Index of the output in that transaction
    pub index: OutputIndex,
}

impl OutPoint {
    /// Create a new outpoint
    pub const fn new(tx_hash: TxHash, index: OutputIndex) -> Self {
        Self { tx_hash, index }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tx_hash, self.index)
    }
}

/// Claim on a previously created output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    /// Hash of the transaction holding the claimed output
    pub prev_hash: TxHash,
    /// Index of the claimed output
    pub output_index: OutputIndex,
    /// Authorization by the claimed output's owner
    pub signature: Option<Signature>,
}

impl TxInput {
    /// Create an unsigned input
    pub fn new(prev_hash: TxHash, output_index: OutputIndex) -> Self {
        Self {
            prev_hash,
            output_index,
            signature: None,
        }
    }

    /// The outpoint this input claims
    pub fn outpoint(&self) -> OutPoint {
        OutPoint::new(self.prev_hash, self.output_index)
    }

    /// Check if a signature is attached
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}

/// Newly created spendable value
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TxOutput {
    /// Value in minor units
    pub value: Amount,
    /// Owner allowed to spend this output
    pub recipient: Address,
}

impl TxOutput {
    /// Create a new output
    pub fn new(value: Amount, recipient: Address) -> Self {
        Self { value, recipient }
    }
}

/// Finalized transaction.
///
/// The hash is computed once from the canonical encoding when the
/// transaction is built or decoded. There are no mutators, so it cannot go
/// stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
    hash: TxHash,
}

impl Transaction {
    /// Finalize a transaction from its parts, computing its hash
    pub fn new(inputs: Vec<TxInput>, outputs: Vec<TxOutput>) -> Self {
        let hash = codec::transaction_hash(&inputs, &outputs);
        Self {
            inputs,
            outputs,
            hash,
        }
    }

    /// Transaction hash
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// All inputs in order
    pub fn inputs(&self) -> &[TxInput] {
        &self.inputs
    }

    /// All outputs in order
    pub fn outputs(&self) -> &[TxOutput] {
        &self.outputs
    }

    /// Input at `index`
    pub fn input(&self, index: usize) -> Option<&TxInput> {
        self.inputs.get(index)
    }

    /// Output at `index`
    pub fn output(&self, index: usize) -> Option<&TxOutput> {
        self.outputs.get(index)
    }

    /// Bytes the owner of input `index` signs
    pub fn signable_payload(&self, index: usize) -> Option<Vec<u8>> {
        codec::signable_payload(&self.inputs, &self.outputs, index)
    }

    /// Outpoints claimed by the inputs, in input order
    pub fn spent_outpoints(&self) -> impl Iterator<Item = OutPoint> + '_ {
        self.inputs.iter().map(TxInput::outpoint)
    }

    /// Outpoints this transaction creates, paired with their outputs
    pub fn created_outputs(&self) -> impl Iterator<Item = (OutPoint, &TxOutput)> + '_ {
        let hash = self.hash;
        self.outputs
            .iter()
            .enumerate()
            .map(move |(index, output)| (OutPoint::new(hash, index as OutputIndex), output))
    }

    /// Sum of output values
    pub fn total_output_value(&self) -> i128 {
        self.outputs.iter().map(|o| o.value as i128).sum()
    }

    /// Canonical encoding
    pub fn encode(&self) -> Vec<u8> {
        codec::encode(self)
    }
}
