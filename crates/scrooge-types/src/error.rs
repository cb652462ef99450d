//! Transaction construction and decoding errors

use scrooge_crypto::CryptoError;
use thiserror::Error;

/// Transaction error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TxError {
    /// Input index past the end of the input list
    #[error("input index {index} out of range ({len} inputs)")]
    InputOutOfRange {
        /// Requested index
        index: usize,
        /// Number of inputs
        len: usize,
    },

    /// Signing or signature parsing failed
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Malformed RLP
    #[error("rlp error: {0}")]
    Rlp(#[from] rlp::DecoderError),

    /// Well-formed RLP with the wrong structure
    #[error("malformed {0}")]
    InvalidShape(&'static str),

    /// Amount field is not 8 bytes
    #[error("invalid amount length: expected 8 bytes, got {0}")]
    InvalidAmountLength(usize),

    /// Decodes, but the bytes are not the canonical encoding of the result
    #[error("non-canonical transaction encoding")]
    NonCanonical,

    /// Extra bytes after the encoded transaction
    #[error("{0} trailing bytes after transaction")]
    TrailingBytes(usize),

    /// Invalid hex string
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/// Result type for transaction operations
pub type TxResult<T> = Result<T, TxError>;
