//! # scrooge-handler
//!
//! Transaction validation and batch acceptance for the Scrooge ledger.
//!
//! This crate provides:
//! - [`check_tx`] and [`is_valid_tx`], validation of one transaction against a pool
//! - [`accept_batch`], single-pass greedy acceptance of a candidate batch
//! - [`TxHandler`], which owns the live pool across epochs
//!
//! ## Architecture
//!
//! ```text
//! candidates ──▶ +--------------+  check_tx   +------------------+
//!                |  TxHandler   | ──────────▶ | SignatureVerifier|
//!                +--------------+             +------------------+
//!                   |        ▲
//!       spend/create|        |lookup
//!                   ▼        |
//!                +--------------+
//!                |   UtxoPool   |
//!                +--------------+
//! ```
//!
//! Candidates are evaluated in encounter order. The first valid spender of an
//! output wins, and a transaction may spend outputs created earlier in the
//! same batch.
//!
//! ## Usage
//!
//! ```ignore
//! use scrooge_handler::TxHandler;
//!
//! let mut handler = TxHandler::new(&genesis);
//! let accepted = handler.handle_txs(&candidates)?;
//! let pool = handler.into_pool();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod handler;
mod validator;

pub use error::{HandlerError, HandlerResult, Rejection};
pub use handler::{accept_batch, TxHandler};
pub use validator::{check_tx, is_valid_tx};
