//! Canonical RLP encoding for transactions.
//!
//! ```text
//! transaction      = [ [input...], [output...] ]
//! input            = [ prev_hash, output_index, signature | "" ]
//! output           = [ value, recipient ]
//! signable(i)      = [ [ prev_hash_i, output_index_i ], [output...] ]
//! ```
//!
//! `value` is the 8-byte big-endian two's complement of the amount. The
//! transaction hash is Keccak-256 over the full encoding, signatures
//! included. The payload for input `i` covers only that input's outpoint and
//! every output; other inputs and all signatures are left out.

use crate::error::{TxError, TxResult};
use crate::transaction::{Transaction, TxInput, TxOutput};
use rlp::{Rlp, RlpStream};
use scrooge_crypto::{keccak256, Signature};
use scrooge_primitives::{Address, Amount, OutputIndex, TxHash, H256};

const AMOUNT_LEN: usize = 8;

// ============================================================================
// Encoding
// ============================================================================

/// Encode a transaction to its canonical bytes
pub fn encode(tx: &Transaction) -> Vec<u8> {
    encode_parts(tx.inputs(), tx.outputs())
}

/// Hash of a transaction built from `inputs` and `outputs`
pub fn transaction_hash(inputs: &[TxInput], outputs: &[TxOutput]) -> TxHash {
    keccak256(&encode_parts(inputs, outputs))
}

/// Bytes signed by the owner of input `index`, or `None` if out of range
pub fn signable_payload(inputs: &[TxInput], outputs: &[TxOutput], index: usize) -> Option<Vec<u8>> {
    inputs.get(index).map(|input| input_payload(input, outputs))
}

/// Bytes signed by the owner of `input` in a transaction paying `outputs`
pub fn input_payload(input: &TxInput, outputs: &[TxOutput]) -> Vec<u8> {
    let mut s = RlpStream::new_list(2);
    s.begin_list(2);
    s.append(&input.prev_hash);
    s.append(&input.output_index);
    append_outputs(&mut s, outputs);
    s.out().to_vec()
}

fn encode_parts(inputs: &[TxInput], outputs: &[TxOutput]) -> Vec<u8> {
    let mut s = RlpStream::new_list(2);
    s.begin_list(inputs.len());
    for input in inputs {
        s.begin_list(3);
        s.append(&input.prev_hash);
        s.append(&input.output_index);
        match &input.signature {
            Some(signature) => {
                s.append(&signature.to_bytes().to_vec());
            }
            None => {
                s.append_empty_data();
            }
        }
    }
    append_outputs(&mut s, outputs);
    s.out().to_vec()
}

fn append_outputs(s: &mut RlpStream, outputs: &[TxOutput]) {
    s.begin_list(outputs.len());
    for output in outputs {
        s.begin_list(2);
        s.append(&output.value.to_be_bytes().to_vec());
        s.append(&output.recipient);
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a transaction from its canonical bytes, recomputing the hash
pub fn decode(bytes: &[u8]) -> TxResult<Transaction> {
    let rlp = Rlp::new(bytes);
    let total = rlp.payload_info()?.total();
    if total != bytes.len() {
        return Err(TxError::TrailingBytes(bytes.len() - total));
    }
    expect_list(&rlp, 2, "transaction")?;

    let inputs = list_at(&rlp, 0, "input list")?
        .iter()
        .map(|item| decode_input(&item))
        .collect::<TxResult<Vec<_>>>()?;
    let outputs = list_at(&rlp, 1, "output list")?
        .iter()
        .map(|item| decode_output(&item))
        .collect::<TxResult<Vec<_>>>()?;

    let tx = Transaction::new(inputs, outputs);
    // The hash is taken over the canonical form, so any other spelling is refused
    if encode(&tx) != bytes {
        return Err(TxError::NonCanonical);
    }
    Ok(tx)
}

/// Decode a 0x-prefixed (or bare) hex string
pub fn decode_hex(s: &str) -> TxResult<Transaction> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|e| TxError::InvalidHex(e.to_string()))?;
    decode(&bytes)
}

/// Encode to a 0x-prefixed hex string
pub fn encode_hex(tx: &Transaction) -> String {
    format!("0x{}", hex::encode(encode(tx)))
}

fn decode_input(rlp: &Rlp) -> TxResult<TxInput> {
    expect_list(rlp, 3, "input")?;
    let prev_hash: H256 = rlp.val_at(0)?;
    let output_index: OutputIndex = rlp.val_at(1)?;
    let raw_signature: Vec<u8> = rlp.val_at(2)?;
    let signature = if raw_signature.is_empty() {
        None
    } else {
        Some(Signature::from_slice(&raw_signature)?)
    };
    Ok(TxInput {
        prev_hash,
        output_index,
        signature,
    })
}

fn decode_output(rlp: &Rlp) -> TxResult<TxOutput> {
    expect_list(rlp, 2, "output")?;
    let raw_value: Vec<u8> = rlp.val_at(0)?;
    let value_bytes: [u8; AMOUNT_LEN] = raw_value
        .as_slice()
        .try_into()
        .map_err(|_| TxError::InvalidAmountLength(raw_value.len()))?;
    let recipient: Address = rlp.val_at(1)?;
    Ok(TxOutput::new(Amount::from_be_bytes(value_bytes), recipient))
}

fn list_at<'a>(rlp: &Rlp<'a>, index: usize, what: &'static str) -> TxResult<Rlp<'a>> {
    let item = rlp.at(index)?;
    if !item.is_list() {
        return Err(TxError::InvalidShape(what));
    }
    Ok(item)
}

fn expect_list(rlp: &Rlp, items: usize, what: &'static str) -> TxResult<()> {
    if !rlp.is_list() || rlp.item_count()? != items {
        return Err(TxError::InvalidShape(what));
    }
    Ok(())
}
