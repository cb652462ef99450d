//! Scrooge ledger node binary
//!
//! Loads a genesis UTXO pool, then either reports the verdict of each
//! transaction in a batch (`check`) or runs epochs over batches and prints
//! the accepted transactions and the resulting pool (`epoch`).

mod cli;
mod config;

use anyhow::{Context, Result};
use cli::{Cli, Command};
use config::{load_batch_file, load_genesis_file, GenesisConfig};
use scrooge_handler::TxHandler;
use scrooge_primitives::TxHash;
use scrooge_types::Transaction;
use scrooge_utxo::UtxoPool;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let pool = load_pool(cli.genesis.as_deref())?;
    tracing::info!(utxos = pool.len(), value = %pool.total_value(), "genesis pool loaded");

    match cli.command {
        Command::Check { batch } => {
            let txs = load_batch_file(&batch)?;
            for line in check_batch(&pool, &txs)? {
                println!("{}", line);
            }
        }
        Command::Epoch { batch } => {
            let report = run_epochs(&pool, &batch)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Starting pool from the genesis file, or an empty pool
fn load_pool(genesis: Option<&Path>) -> Result<UtxoPool> {
    match genesis {
        Some(path) => {
            let config = load_genesis_file(path)?;
            Ok(config
                .to_pool()
                .with_context(|| format!("invalid genesis file {:?}", path))?)
        }
        None => {
            tracing::warn!("No genesis file given, starting from an empty pool");
            Ok(UtxoPool::new())
        }
    }
}

/// One verdict line per transaction, each checked against `pool` alone
fn check_batch(pool: &UtxoPool, txs: &[Transaction]) -> Result<Vec<String>> {
    let handler = TxHandler::new(pool);
    let mut lines = Vec::with_capacity(txs.len());

    for tx in txs {
        let line = match handler.check_tx(tx) {
            Ok(()) => format!("{} valid", tx.hash()),
            Err(e) => match e.rejection() {
                Some(reason) => format!("{} rejected: {}", tx.hash(), reason),
                None => return Err(e).with_context(|| format!("checking {}", tx.hash())),
            },
        };
        lines.push(line);
    }

    Ok(lines)
}

/// Accepted transactions of one epoch
#[derive(Debug, Serialize)]
struct EpochSummary {
    epoch: u64,
    candidates: usize,
    accepted: Vec<TxHash>,
}

/// Output of the `epoch` command
#[derive(Debug, Serialize)]
struct EpochReport {
    epochs: Vec<EpochSummary>,
    pool: GenesisConfig,
}

/// Run one epoch per batch file, in order, over a copy of `pool`
fn run_epochs(pool: &UtxoPool, batches: &[PathBuf]) -> Result<EpochReport> {
    let mut handler = TxHandler::new(pool);
    let mut epochs = Vec::with_capacity(batches.len());

    for path in batches {
        let txs = load_batch_file(path)?;
        let accepted = handler
            .handle_txs(&txs)
            .with_context(|| format!("epoch over {:?} aborted", path))?;
        epochs.push(EpochSummary {
            epoch: handler.epochs(),
            candidates: txs.len(),
            accepted: accepted.iter().map(Transaction::hash).collect(),
        });
    }

    Ok(EpochReport {
        epochs,
        pool: GenesisConfig::from_pool(handler.pool()),
    })
}
