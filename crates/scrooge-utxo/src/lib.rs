//! # scrooge-utxo
//!
//! The pool of unspent transaction outputs.
//!
//! ## Lifecycle
//!
//! ```text
//!   accepted tx ──creates──▶ (tx_hash, i) ──▶ UtxoPool ──consumed by──▶ later accepted tx
//! ```
//!
//! An entry appears when the transaction that created it is accepted and
//! disappears when a later accepted transaction spends it. The pool does no
//! locking. Exactly one owner mutates it at a time.
//!
//! ## Usage
//!
//! ```ignore
//! use scrooge_utxo::UtxoPool;
//!
//! let mut pool = UtxoPool::new();
//! pool.insert(outpoint, output);
//! assert!(pool.contains(&outpoint));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod pool;

pub use pool::UtxoPool;
