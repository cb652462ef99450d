//! # scrooge-types
//!
//! Transaction model for the Scrooge ledger.
//!
//! This crate provides:
//! - [`Transaction`](transaction::Transaction), built with [`TxBuilder`]
//! - [`OutPoint`](transaction::OutPoint), the key of an unspent output
//! - [`codec`], the canonical encoding, signing payloads and hashing

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
pub mod codec;
mod error;
pub mod transaction;

pub use builder::TxBuilder;
pub use error::{TxError, TxResult};
pub use transaction::{OutPoint, Transaction, TxInput, TxOutput};
