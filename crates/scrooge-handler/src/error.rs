//! Transaction handler error types

use scrooge_crypto::CryptoError;
use scrooge_primitives::Amount;
use scrooge_types::OutPoint;
use thiserror::Error;

/// Validation rule a transaction broke
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Claimed output is unknown or already spent
    #[error("claimed output {0} is not in the utxo pool")]
    MissingUtxo(OutPoint),

    /// Input signature does not authorize spending the claimed output
    #[error("signature on input {input} does not authorize spending {outpoint}")]
    InvalidSignature {
        /// Index of the offending input
        input: usize,
        /// Output it claims
        outpoint: OutPoint,
    },

    /// Same output claimed by two inputs of this transaction
    #[error("output {0} claimed more than once")]
    DuplicateInput(OutPoint),

    /// Output with a value below zero
    #[error("output {output} has negative value {value}")]
    NegativeOutput {
        /// Index of the offending output
        output: usize,
        /// Its value
        value: Amount,
    },

    /// Outputs are worth more than the inputs they spend
    #[error("insufficient input value: inputs {inputs}, outputs {outputs}")]
    InsufficientInput {
        /// Sum of claimed output values
        inputs: i128,
        /// Sum of new output values
        outputs: i128,
    },
}

/// Transaction handler errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The transaction is invalid against the current pool
    #[error("transaction rejected: {0}")]
    Rejected(#[from] Rejection),

    /// The signature verifier failed to produce a verdict
    #[error("signature verifier failed: {0}")]
    Crypto(#[from] CryptoError),
}

impl HandlerError {
    /// The broken rule, if this is a rejection
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            HandlerError::Rejected(rejection) => Some(rejection),
            HandlerError::Crypto(_) => None,
        }
    }
}

/// Result type for transaction handler operations
pub type HandlerResult<T> = Result<T, HandlerError>;
