//! Single-transaction validation against a pool snapshot

use crate::error::{HandlerError, HandlerResult, Rejection};
use scrooge_crypto::{CryptoError, SignatureVerifier};
use scrooge_types::{codec, Transaction};
use scrooge_utxo::UtxoPool;
use std::collections::HashSet;

/// Check `tx` against `pool`, returning the first rule it breaks.
///
/// Each input is checked for existence in the pool, then for a signature by
/// the claimed output's owner over that input's payload, then for a repeat
/// claim within the same transaction. Outputs must be non-negative and may
/// not sum to more than the claimed inputs. Surplus is allowed and simply
/// disappears.
///
/// The pool is only read. Calling this twice against the same pool state
/// gives the same answer.
pub fn check_tx<V>(tx: &Transaction, pool: &UtxoPool, verifier: &V) -> HandlerResult<()>
where
    V: SignatureVerifier + ?Sized,
{
    let mut claimed = HashSet::with_capacity(tx.inputs().len());
    let mut input_total: i128 = 0;

    for (index, input) in tx.inputs().iter().enumerate() {
        let outpoint = input.outpoint();

        let spent = pool
            .get(&outpoint)
            .ok_or(Rejection::MissingUtxo(outpoint))?;

        let payload = codec::input_payload(input, tx.outputs());
        if !verifier.verify(&spent.recipient, &payload, input.signature.as_ref())? {
            return Err(Rejection::InvalidSignature {
                input: index,
                outpoint,
            }
            .into());
        }

        if !claimed.insert(outpoint) {
            return Err(Rejection::DuplicateInput(outpoint).into());
        }

        input_total += i128::from(spent.value);
    }

    let mut output_total: i128 = 0;
    for (index, output) in tx.outputs().iter().enumerate() {
        if output.value < 0 {
            return Err(Rejection::NegativeOutput {
                output: index,
                value: output.value,
            }
            .into());
        }
        output_total += i128::from(output.value);
    }

    if input_total < output_total {
        return Err(Rejection::InsufficientInput {
            inputs: input_total,
            outputs: output_total,
        }
        .into());
    }

    Ok(())
}

/// Aggregate verdict of [`check_tx`].
///
/// Rule violations become `Ok(false)`; verifier faults are returned as is.
pub fn is_valid_tx<V>(tx: &Transaction, pool: &UtxoPool, verifier: &V) -> Result<bool, CryptoError>
where
    V: SignatureVerifier + ?Sized,
{
    match check_tx(tx, pool, verifier) {
        Ok(()) => Ok(true),
        Err(HandlerError::Rejected(_)) => Ok(false),
        Err(HandlerError::Crypto(e)) => Err(e),
    }
}
