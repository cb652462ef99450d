//! CLI argument parsing for the scrooge node

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scrooge ledger node
#[derive(Parser, Debug, Clone)]
#[command(name = "scrooge")]
#[command(about = "Validate and accept transactions against a UTXO pool")]
#[command(version)]
pub struct Cli {
    /// Genesis file with the starting UTXO pool (empty pool if not specified)
    #[arg(long, global = true)]
    pub genesis: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Node commands
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check each transaction of a batch against the genesis pool
    Check {
        /// JSON array of hex-encoded transactions
        #[arg(long)]
        batch: PathBuf,
    },
    /// Run one or more epochs and print the accepted transactions and resulting pool
    Epoch {
        /// JSON array of hex-encoded transactions, one file per epoch
        #[arg(long, required = true)]
        batch: Vec<PathBuf>,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
