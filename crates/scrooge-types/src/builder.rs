//! Transaction builder

use crate::codec;
use crate::error::{TxError, TxResult};
use crate::transaction::{Transaction, TxInput, TxOutput};
use scrooge_crypto::{keccak256, sign, PrivateKey, Signature};
use scrooge_primitives::{Address, Amount, OutputIndex, TxHash};

/// Transaction builder with fluent API.
///
/// Add every input and output first, then sign: each signature covers all
/// outputs, so adding an output afterwards invalidates earlier signatures.
#[derive(Debug, Clone, Default)]
pub struct TxBuilder {
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
}

impl TxBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim output `index` of transaction `prev_hash`
    pub fn input(mut self, prev_hash: TxHash, index: OutputIndex) -> Self {
        self.inputs.push(TxInput::new(prev_hash, index));
        self
    }

    /// Pay `value` to `recipient`
    pub fn output(mut self, value: Amount, recipient: Address) -> Self {
        self.outputs.push(TxOutput::new(value, recipient));
        self
    }

    /// Payload the owner of input `index` must sign
    pub fn signable_payload(&self, index: usize) -> TxResult<Vec<u8>> {
        codec::signable_payload(&self.inputs, &self.outputs, index).ok_or(
            TxError::InputOutOfRange {
                index,
                len: self.inputs.len(),
            },
        )
    }

    /// Attach a precomputed signature to input `index`
    pub fn signature(mut self, index: usize, signature: Signature) -> TxResult<Self> {
        let len = self.inputs.len();
        let input = self
            .inputs
            .get_mut(index)
            .ok_or(TxError::InputOutOfRange { index, len })?;
        input.signature = Some(signature);
        Ok(self)
    }

    /// Sign input `index` with `key`
    pub fn sign_input(self, index: usize, key: &PrivateKey) -> TxResult<Self> {
        let payload = self.signable_payload(index)?;
        let signature = sign(&keccak256(&payload), key)?;
        self.signature(index, signature)
    }

    /// Finalize, computing the transaction hash
    pub fn build(self) -> Transaction {
        Transaction::new(self.inputs, self.outputs)
    }
}
