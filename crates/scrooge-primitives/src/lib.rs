//! # scrooge-primitives
//!
//! Primitive types for the Scrooge ledger.
//!
//! This crate provides the fixed-size identifiers and numeric aliases shared
//! by every other crate in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod bytes;
mod hash;

pub use address::Address;
pub use bytes::ParseBytesError;
pub use hash::{TxHash, H256};

/// Monetary value in minor units.
///
/// Signed so that a negative output can be expressed and rejected by
/// validation rather than by the type system.
pub type Amount = i64;

/// Position of an output within its transaction's output list
pub type OutputIndex = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_sum_in_wider_type() {
        let values: [Amount; 3] = [Amount::MAX, Amount::MAX, 1];
        let total: i128 = values.iter().map(|v| *v as i128).sum();
        assert_eq!(total, 2 * (Amount::MAX as i128) + 1);
    }
}
